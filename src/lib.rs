pub use circle::*;
pub use parse::*;
pub use shape::*;
pub use square::*;
pub use traits::*;

pub mod prelude {
    pub use crate::{
        circle::*,
        parse::*,
        shape::*,
        square::*,
        traits::*,
    };
}

mod circle;
mod parse;
mod shape;
mod square;
mod traits;

mod internals;
