pub use classification::*;
pub use commands::*;
pub use domain::*;
pub use queries::*;

mod classification;
mod commands;
mod domain;
mod queries;
