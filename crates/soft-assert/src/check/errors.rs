#[derive(Debug, thiserror::Error)]
pub enum AssertError {
    #[error("got ({type_name}) {value} but expect nil")]
    NotNil {
        type_name: &'static str,
        value: String,
    },

    #[error("got ({got_type}) {got} but expect ({expect_type}) {expect}")]
    NotEqual {
        got_type: &'static str,
        got: String,
        expect_type: &'static str,
        expect: String,
    },

    #[error("did not panic")]
    DidNotPanic,

    /// The regex error is kept as the source; the message stays fixed so
    /// callers can match on it.
    #[error("invalid pattern")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("got {message:?} which does not match {pattern:?}")]
    PatternMismatch { message: String, pattern: String },
}

impl AssertError {
    /// Error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AssertError::NotNil { .. } => "ASSERT_NOT_NIL",
            AssertError::NotEqual { .. } => "ASSERT_NOT_EQUAL",
            AssertError::DidNotPanic => "ASSERT_DID_NOT_PANIC",
            AssertError::InvalidPattern { .. } => "ASSERT_INVALID_PATTERN",
            AssertError::PatternMismatch { .. } => "ASSERT_PATTERN_MISMATCH",
        }
    }
}
