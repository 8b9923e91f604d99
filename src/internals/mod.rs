pub(crate) use model::*;

mod model;
