pub use domain::*;
pub use queries::*;
pub use update::*;

mod domain;
mod queries;
mod update;
