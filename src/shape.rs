use std::fmt;
use std::io;

use crate::internals::{ErasedShape, ShapeModel, StrategyModel};
use crate::traits::{Draw, DrawStrategy, Serialize};

/// A value-semantic handle over any drawable, serializable shape.
///
/// Unrelated concrete types live behind one homogeneous `Vec<Shape>` without
/// sharing a base type. Cloning is a deep copy of the held value, so clones are
/// fully independent; moving transfers ownership of the held value.
/// ```
/// use erased_shapes::prelude::*;
///
/// let shapes = vec![
///     Shape::new(Circle::new(2.0)),
///     Shape::new(Square::new(1.5)),
/// ];
///
/// let mut buf = Vec::new();
/// draw_all(&shapes, &mut buf).unwrap();
/// assert_eq!(
///     String::from_utf8(buf).unwrap(),
///     "Drawing Circle: radius = 2\nDrawing Square: width = 1.5\n",
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Shape {
    model: Box<dyn ErasedShape>,
}

impl Shape {
    /// Wraps a concrete shape.
    ///
    /// The trait bounds are the capability check: a type that lacks `Draw`,
    /// `Serialize`, or `Display` is rejected here, at the wrapping point,
    /// with a diagnostic naming the missing capability.
    #[inline]
    pub fn new<T>(shape: T) -> Self
    where
        T: Draw + Serialize + fmt::Display + fmt::Debug + Clone + 'static,
    {
        Self { model: Box::new(ShapeModel::new(shape)) }
    }

    /// Wraps a concrete shape together with an injected draw behavior.
    /// This constructor is the dependency-injection point: the strategy
    /// replaces the shape's default draw, while serialization and rendering
    /// stay the shape's own. The shape does not need to implement `Draw`.
    /// ```
    /// use std::io::{self, Write};
    /// use erased_shapes::prelude::*;
    ///
    /// let shape = Shape::with_strategy(Circle::new(4.2), |circle: &Circle, out: &mut dyn io::Write| {
    ///     writeln!(out, "ASCII Circle: ( radius = {} )", circle.radius())
    /// });
    ///
    /// let mut buf = Vec::new();
    /// draw(&shape, &mut buf).unwrap();
    /// assert_eq!(buf, b"ASCII Circle: ( radius = 4.2 )\n");
    ///
    /// let mut buf = Vec::new();
    /// serialize(&shape, &mut buf).unwrap();
    /// assert_eq!(buf, b"Circle: radius = 4.2\n");
    /// ```
    #[inline]
    pub fn with_strategy<T, D>(shape: T, drawer: D) -> Self
    where
        T: Serialize + fmt::Display + fmt::Debug + Clone + 'static,
        D: DrawStrategy<T> + 'static,
    {
        Self { model: Box::new(StrategyModel::new(shape, drawer)) }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.model.render(f)
    }
}

impl Draw for Shape {
    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.model.draw(out)
    }
}

impl Serialize for Shape {
    fn serialize(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.model.serialize(out)
    }
}

/// Draws a shape into the writer. Works the same on a wrapped `Shape` and on
/// a concrete value, so wrapping never changes the output.
#[inline]
pub fn draw<T: Draw + ?Sized>(shape: &T, out: &mut dyn io::Write) -> io::Result<()> {
    shape.draw(out)
}

/// Serializes a shape into the writer as one reconstructable line.
#[inline]
pub fn serialize<T: Serialize + ?Sized>(shape: &T, out: &mut dyn io::Write) -> io::Result<()> {
    shape.serialize(out)
}

/// Draws every shape in sequence order, one line per shape.
pub fn draw_all<'a, I>(shapes: I, out: &mut dyn io::Write) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Shape>,
{
    for shape in shapes {
        draw(shape, out)?;
    }
    Ok(())
}

/// Serializes every shape in sequence order, one line per shape.
pub fn serialize_all<'a, I>(shapes: I, out: &mut dyn io::Write) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Shape>,
{
    for shape in shapes {
        serialize(shape, out)?;
    }
    Ok(())
}
