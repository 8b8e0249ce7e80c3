pub use controller::*;
pub use domain::*;
pub use targeting::*;
pub use validation::*;

mod controller;
mod domain;
mod targeting;
mod validation;
