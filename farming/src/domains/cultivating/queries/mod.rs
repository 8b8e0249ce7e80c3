pub use get_grid::*;
pub use properties::*;

mod get_grid;
mod properties;
