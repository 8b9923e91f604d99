use std::fmt;
use std::io::{self, Write};

use derive_more::Constructor;

use crate::traits::{Draw, Serialize};

/// A circle described by its radius.
/// The radius is taken as-is; no range validation is applied, so a negative radius is accepted.
/// ```
/// use erased_shapes::prelude::*;
/// let circle = Circle::new(2.0);
/// assert_eq!(circle.radius(), 2.0);
/// assert_eq!(circle.to_string(), "Circle: radius = 2");
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Constructor)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle: radius = {}", self.radius)
    }
}

impl Draw for Circle {
    /// ```
    /// use erased_shapes::prelude::*;
    /// let mut buf = Vec::new();
    /// Circle::new(2.0).draw(&mut buf).unwrap();
    /// assert_eq!(buf, b"Drawing Circle: radius = 2\n");
    /// ```
    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Drawing Circle: radius = {}", self.radius)
    }
}

impl Serialize for Circle {
    /// Writes the render line terminated by a newline.
    /// ```
    /// use erased_shapes::prelude::*;
    /// let mut buf = Vec::new();
    /// Circle::new(2.0).serialize(&mut buf).unwrap();
    /// assert_eq!(buf, b"Circle: radius = 2\n");
    /// ```
    fn serialize(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}
