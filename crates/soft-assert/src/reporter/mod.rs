//! The reporting capability consumed by the checks.
//!
//! Checks depend only on the [`Reporter`] trait. [`Recorder`] is the
//! in-crate implementation: it keeps every failure with its call site and can
//! fail the surrounding test once, on drop.

mod recorder;
mod traits;

pub use recorder::{Failure, Recorder};
pub use traits::Reporter;
