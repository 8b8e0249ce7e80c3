pub use codec::*;
pub use contributor::*;
pub use envelope::*;
pub use section::*;
pub use tracking::*;

mod codec;
mod contributor;
mod envelope;
mod section;
mod tracking;
