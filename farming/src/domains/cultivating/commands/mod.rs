pub use change_seed::*;
pub use create_grid::*;
pub use plant_seed::*;
pub use till_cell::*;
pub use water_cell::*;

mod change_seed;
mod create_grid;
mod plant_seed;
mod till_cell;
mod water_cell;
