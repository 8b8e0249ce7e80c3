pub use cell::*;
pub use line::*;
pub use vector::*;

mod cell;
mod line;
mod vector;
