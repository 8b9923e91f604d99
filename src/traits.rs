use std::io;

/// This trait describes the act of drawing a shape as text.
/// Implementing it is part of the capability set required for wrapping in `Shape`.
pub trait Draw {
    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()>;
}

/// This trait writes a shape as one reconstructable line.
/// The written line can be turned back into a value through `FromStr`.
pub trait Serialize {
    fn serialize(&self, out: &mut dyn io::Write) -> io::Result<()>;
}

/// A behavior injected at wrapping time that substitutes for a shape's default draw.
/// Serialization and rendering are not affected by the substitution.
///
/// Any cloneable closure over the shape and an output writer qualifies:
/// ```
/// use std::io::{self, Write};
/// use erased_shapes::prelude::*;
///
/// let shape = Shape::with_strategy(Circle::new(4.2), |circle: &Circle, out: &mut dyn io::Write| {
///     writeln!(out, "( {} )", circle.radius())
/// });
///
/// let mut buf = Vec::new();
/// draw(&shape, &mut buf).unwrap();
/// assert_eq!(buf, b"( 4.2 )\n");
/// ```
pub trait DrawStrategy<T>: Clone {
    fn draw(&self, shape: &T, out: &mut dyn io::Write) -> io::Result<()>;
}

impl<T, F> DrawStrategy<T> for F
where
    F: Fn(&T, &mut dyn io::Write) -> io::Result<()> + Clone,
{
    #[inline]
    fn draw(&self, shape: &T, out: &mut dyn io::Write) -> io::Result<()> {
        self(shape, out)
    }
}
