pub use domain::*;
pub use evaluator::*;

mod domain;
mod evaluator;
