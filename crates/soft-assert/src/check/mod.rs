mod errors;
mod handler;
mod types;

pub use errors::AssertError;
pub use handler::{equal, nil, panics, recover};
pub use types::{Nullable, PanicOutcome};
