//! soft-assert: assertions for unit tests that record instead of abort
//!
//! This library provides three checks:
//! - `nil` - the value is logically absent
//! - `equal` - two values have the same type and compare equal
//! - `panics` - a callable panics with a message matching a regex
//!
//! Each check reports at most one failure to a [`Reporter`] and then returns,
//! so a test keeps running after a failed check. [`Recorder`] is a ready-made
//! reporter for plain `#[test]` functions.

pub mod check;
pub mod logging;
pub mod reporter;

// Re-export commonly used items at the crate root
pub use check::{AssertError, Nullable, PanicOutcome, equal, nil, panics, recover};
pub use logging::init_test_logging;
pub use reporter::{Failure, Recorder, Reporter};
