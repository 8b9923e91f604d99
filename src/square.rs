use std::fmt;
use std::io::{self, Write};

use derive_more::Constructor;

use crate::traits::{Draw, Serialize};

/// A square described by its width. The width is taken as-is, like `Circle`'s radius.
/// ```
/// use erased_shapes::prelude::*;
/// let square = Square::new(1.5);
/// assert_eq!(square.width(), 1.5);
/// assert_eq!(square.to_string(), "Square: width = 1.5");
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Constructor)]
pub struct Square {
    width: f64,
}

impl Square {
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square: width = {}", self.width)
    }
}

impl Draw for Square {
    fn draw(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "Drawing Square: width = {}", self.width)
    }
}

impl Serialize for Square {
    fn serialize(&self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}
