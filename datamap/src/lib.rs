pub use envelope::*;
pub use json::*;
pub use storage::*;

mod envelope;
mod json;
mod storage;
