pub mod cultivating;
pub mod decaying;
pub mod planting;
pub mod timing;
pub mod tiling;
pub mod tooling;
