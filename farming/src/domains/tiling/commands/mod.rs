pub use paint_preview::*;
pub use paint_tile::*;
pub use reclassify::*;
pub use register_layer::*;

mod paint_preview;
mod paint_tile;
mod reclassify;
mod register_layer;
