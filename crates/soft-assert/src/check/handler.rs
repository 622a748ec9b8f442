use std::any::{Any, type_name};
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use regex::Regex;
use tracing::{debug, warn};

use super::errors::AssertError;
use super::types::{Nullable, PanicOutcome};
use crate::reporter::Reporter;

/// Report a failure unless `got` is nil.
#[track_caller]
pub fn nil<R, V>(reporter: &R, got: V)
where
    R: Reporter + ?Sized,
    V: Nullable + Debug,
{
    reporter.helper();
    report(reporter, "nil", check_nil(&got));
}

/// Report a failure unless `got` and `expect` have the same type and are
/// equal under that type's `PartialEq`.
///
/// Values of different types never compare equal, including numeric types of
/// different widths.
#[track_caller]
pub fn equal<R, G, E>(reporter: &R, got: G, expect: E)
where
    R: Reporter + ?Sized,
    G: PartialEq + Debug + 'static,
    E: Debug + 'static,
{
    reporter.helper();
    report(reporter, "equal", check_equal(&got, &expect));
}

/// Run `f` and report a failure unless it panics with a message matching
/// `pattern`.
///
/// The pattern is searched for anywhere in the message, not anchored. An
/// invalid pattern is reported as `invalid pattern` whether or not `f`
/// panicked. The panic is always contained within this call.
#[track_caller]
pub fn panics<R, F>(reporter: &R, f: F, pattern: &str)
where
    R: Reporter + ?Sized,
    F: FnOnce(),
{
    reporter.helper();
    let outcome = recover(f);
    report(reporter, "panics", check_panic(&outcome, pattern));
}

/// Run `f`, capturing a panic instead of letting it unwind further.
pub fn recover<F: FnOnce()>(f: F) -> PanicOutcome {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => PanicOutcome::Completed,
        Err(payload) => {
            let message = payload_message(&*payload);
            debug!(event = "assert.panic_captured", message = %message);
            PanicOutcome::Panicked(message)
        }
    }
}

// Same rendering as the default panic hook.
fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

fn check_nil<V: Nullable + Debug>(got: &V) -> Result<(), AssertError> {
    if got.is_nil() {
        return Ok(());
    }
    Err(AssertError::NotNil {
        type_name: type_name::<V>(),
        value: format!("{:?}", got),
    })
}

fn check_equal<G, E>(got: &G, expect: &E) -> Result<(), AssertError>
where
    G: PartialEq + Debug + 'static,
    E: Debug + 'static,
{
    let same = (expect as &dyn Any)
        .downcast_ref::<G>()
        .is_some_and(|expect| got == expect);

    if same {
        return Ok(());
    }
    Err(AssertError::NotEqual {
        got_type: type_name::<G>(),
        got: format!("{:?}", got),
        expect_type: type_name::<E>(),
        expect: format!("{:?}", expect),
    })
}

fn check_panic(outcome: &PanicOutcome, pattern: &str) -> Result<(), AssertError> {
    let regex = Regex::new(pattern).map_err(|source| {
        warn!(
            event = "assert.pattern_compile_failed",
            pattern = pattern,
            error = %source
        );
        AssertError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    match outcome {
        PanicOutcome::Completed => Err(AssertError::DidNotPanic),
        PanicOutcome::Panicked(message) if regex.is_match(message) => Ok(()),
        PanicOutcome::Panicked(message) => Err(AssertError::PatternMismatch {
            message: message.clone(),
            pattern: pattern.to_string(),
        }),
    }
}

#[track_caller]
fn report<R>(reporter: &R, check: &'static str, result: Result<(), AssertError>)
where
    R: Reporter + ?Sized,
{
    match result {
        Ok(()) => debug!(event = "assert.check_passed", check = check),
        Err(e) => {
            warn!(
                event = "assert.check_failed",
                check = check,
                error_code = e.error_code(),
                error = %e
            );
            reporter.error(format_args!("{}", e));
        }
    }
}
