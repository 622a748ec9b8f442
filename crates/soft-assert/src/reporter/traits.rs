use std::fmt;

/// The reporting capability the checks depend on.
///
/// Mirrors the two calls a test harness needs: marking the current frame as
/// a helper, and recording a failure. Both take `&self` so one reporter can
/// be shared by a multi-threaded test; implementations that keep state use
/// interior mutability.
pub trait Reporter {
    /// Mark the calling check as a helper frame.
    fn helper(&self);

    /// Record a failure. Recording never aborts the caller.
    ///
    /// Every check is `#[track_caller]`, so `Location::caller()` inside an
    /// implementation resolves to the line that invoked the check.
    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>);
}
