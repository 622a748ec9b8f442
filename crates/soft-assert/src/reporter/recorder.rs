use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, error};

use super::traits::Reporter;

/// A single failure captured by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    message: String,
    file: &'static str,
    line: u32,
    column: u32,
}

impl Failure {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.message)
    }
}

/// Reporter that records every failure with its call-site location.
///
/// Use `Recorder::new()` to inspect failures from a test, or add
/// `fail_on_drop()` to get soft-assertion behavior inside a plain `#[test]`:
/// every check runs, and the recorder panics once on drop if anything failed.
#[derive(Debug, Default)]
pub struct Recorder {
    failures: Mutex<Vec<Failure>>,
    helper_calls: AtomicUsize,
    fail_on_drop: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panic on drop when at least one failure was recorded
    pub fn fail_on_drop(mut self) -> Self {
        self.fail_on_drop = true;
        self
    }

    /// Snapshot of the recorded failures, in recording order
    pub fn failures(&self) -> Vec<Failure> {
        self.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|f| f.message.clone()).collect()
    }

    pub fn failure_count(&self) -> usize {
        self.lock().len()
    }

    pub fn has_failed(&self) -> bool {
        !self.lock().is_empty()
    }

    pub fn helper_calls(&self) -> usize {
        self.helper_calls.load(Ordering::Relaxed)
    }

    // A check that panicked mid-record must not hide the failures before it.
    fn lock(&self) -> MutexGuard<'_, Vec<Failure>> {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for Recorder {
    fn helper(&self) {
        self.helper_calls.fetch_add(1, Ordering::Relaxed);
    }

    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        let failure = Failure {
            message: args.to_string(),
            file: location.file(),
            line: location.line(),
            column: location.column(),
        };
        debug!(
            event = "reporter.failure_recorded",
            file = failure.file,
            line = failure.line,
            message = %failure.message
        );
        self.lock().push(failure);
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        if !self.fail_on_drop || std::thread::panicking() {
            return;
        }

        let failures = self.lock();
        if failures.is_empty() {
            return;
        }

        error!(event = "reporter.failures_on_drop", count = failures.len());

        let summary = failures
            .iter()
            .map(|f| format!("  {}", f))
            .collect::<Vec<_>>()
            .join("\n");
        panic!("{} assertion(s) failed:\n{}", failures.len(), summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recorder_is_clean() {
        let recorder = Recorder::new();
        assert!(!recorder.has_failed());
        assert_eq!(recorder.failure_count(), 0);
        assert_eq!(recorder.helper_calls(), 0);
    }

    #[test]
    fn test_records_message_and_location() {
        let recorder = Recorder::new();
        let line = line!() + 1;
        recorder.error(format_args!("got {} but expect {}", 1, 2));

        let failures = recorder.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message(), "got 1 but expect 2");
        assert_eq!(failures[0].line(), line);
        assert!(failures[0].file().ends_with("recorder.rs"));
    }

    #[test]
    fn test_counts_helper_calls() {
        let recorder = Recorder::new();
        recorder.helper();
        recorder.helper();
        assert_eq!(recorder.helper_calls(), 2);
        assert!(!recorder.has_failed());
    }

    #[test]
    fn test_failure_display() {
        let recorder = Recorder::new();
        recorder.error(format_args!("did not panic"));
        let failure = &recorder.failures()[0];
        assert_eq!(
            failure.to_string(),
            format!("{}:{}: did not panic", failure.file(), failure.line())
        );
    }

    #[test]
    fn test_fail_on_drop_without_failures_is_silent() {
        let recorder = Recorder::new().fail_on_drop();
        recorder.helper();
        drop(recorder);
    }

    #[test]
    #[should_panic(expected = "2 assertion(s) failed")]
    fn test_fail_on_drop_panics_with_summary() {
        let recorder = Recorder::new().fail_on_drop();
        recorder.error(format_args!("first"));
        recorder.error(format_args!("second"));
        drop(recorder);
    }

    #[test]
    fn test_poisoned_lock_keeps_failures() {
        let recorder = std::sync::Arc::new(Recorder::new());
        recorder.error(format_args!("before poison"));

        let poisoner = std::sync::Arc::clone(&recorder);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.failures.lock();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(recorder.messages(), vec!["before poison"]);
    }
}
