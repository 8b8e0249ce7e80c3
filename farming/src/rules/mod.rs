pub use is_cell_workable::*;

mod is_cell_workable;
