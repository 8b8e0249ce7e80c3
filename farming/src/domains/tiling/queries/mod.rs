pub use get_layer::*;
pub use resolve_write_target::*;

mod get_layer;
mod resolve_write_target;
