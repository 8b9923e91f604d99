use std::fmt;
use std::io;

use dyn_clone::{clone_trait_object, DynClone};

use crate::traits::{Draw, DrawStrategy, Serialize};

/// The internal interface hiding the concrete shape type from `Shape`.
/// Duplication comes through `DynClone`, so `Box<dyn ErasedShape>` clones deeply.
pub(crate) trait ErasedShape: fmt::Debug + DynClone {
    fn serialize(&self, out: &mut dyn io::Write) -> io::Result<()>;
    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()>;
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

clone_trait_object!(ErasedShape);

/// Binds one concrete shape. Every operation is the shape's own.
#[derive(Clone, Debug)]
pub(crate) struct ShapeModel<T> {
    object: T,
}

impl<T> ShapeModel<T> {
    #[inline]
    pub(crate) fn new(object: T) -> Self {
        Self { object }
    }
}

impl<T> ErasedShape for ShapeModel<T>
where
    T: Draw + Serialize + fmt::Display + fmt::Debug + Clone,
{
    fn serialize(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.object.serialize(out)
    }

    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.object.draw(out)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.object, f)
    }
}

/// Binds one concrete shape plus an injected draw behavior.
/// Serialization and rendering stay the shape's own; only draw is substituted.
/// Note that the shape itself does not need to implement `Draw` here.
#[derive(Clone)]
pub(crate) struct StrategyModel<T, D> {
    object: T,
    drawer: D,
}

impl<T, D> StrategyModel<T, D> {
    #[inline]
    pub(crate) fn new(object: T, drawer: D) -> Self {
        Self { object, drawer }
    }
}

impl<T, D> fmt::Debug for StrategyModel<T, D>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The drawer may be a closure, which has no Debug form.
        f.debug_struct("StrategyModel")
            .field("object", &self.object)
            .finish_non_exhaustive()
    }
}

impl<T, D> ErasedShape for StrategyModel<T, D>
where
    T: Serialize + fmt::Display + fmt::Debug + Clone,
    D: DrawStrategy<T>,
{
    fn serialize(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.object.serialize(out)
    }

    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()> {
        self.drawer.draw(&self.object, out)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.object, f)
    }
}
