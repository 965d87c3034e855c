//! Captured error payload for fallible computations.
//!
//! [`CapturedError`] is the uniform failure payload of
//! [`Attempt`](super::Attempt) and of every conversion that narrows a
//! richer failure into an error: it wraps any `std::error::Error`, is
//! cheap to clone, and normalizes panic payloads at the computation
//! boundary so the failure side of the railway always carries a proper
//! error object.
//!
//! # Panic payload normalization
//!
//! `panic!("...")` produces a `&str`/`String` payload; that message is
//! preserved. Any other payload (for example `std::panic::panic_any(42)`)
//! becomes the fixed message "Unknown error".
//!
//! # Examples
//!
//! ```rust
//! use railcar::control::CapturedError;
//!
//! let error = CapturedError::msg("connection reset");
//! assert_eq!(error.to_string(), "connection reset");
//!
//! let wrapped = CapturedError::new("oops".parse::<i32>().unwrap_err());
//! assert_eq!(wrapped.to_string(), "invalid digit found in string");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Fixed message for failures synthesized from an absent value.
const ABSENT_MESSAGE: &str = "No value";

/// Fixed message for panic payloads that carry no message.
const UNKNOWN_MESSAGE: &str = "Unknown error";

/// A cloneable error payload wrapping any `std::error::Error`.
///
/// Equality compares the rendered message: two `CapturedError`s are equal
/// iff their `Display` outputs are equal. This keeps failed containers
/// comparable in tests and folds without requiring the wrapped error type
/// to implement `PartialEq`.
#[derive(Clone)]
pub struct CapturedError {
    inner: Arc<dyn Error + Send + Sync>,
}

impl CapturedError {
    /// Wraps an existing error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::CapturedError;
    ///
    /// let parse_error = "x".parse::<i32>().unwrap_err();
    /// let captured = CapturedError::new(parse_error);
    /// assert_eq!(captured.to_string(), "invalid digit found in string");
    /// ```
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an error from a plain message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::CapturedError;
    ///
    /// let error = CapturedError::msg("timed out");
    /// assert_eq!(error.to_string(), "timed out");
    /// ```
    pub fn msg<S: Into<String>>(message: S) -> Self {
        Self::new(Message(message.into()))
    }

    /// The fixed error synthesized when an absent value is converted into
    /// a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::control::CapturedError;
    ///
    /// assert_eq!(CapturedError::absent().to_string(), "No value");
    /// ```
    pub fn absent() -> Self {
        Self::msg(ABSENT_MESSAGE)
    }

    /// Normalizes a panic payload into an error.
    ///
    /// `&str` and `String` payloads (the product of `panic!` with a
    /// message) keep their message; any other payload becomes the fixed
    /// "Unknown error".
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            UNKNOWN_MESSAGE.to_string()
        };
        Self::msg(message)
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}

impl fmt::Debug for CapturedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("CapturedError")
            .field(&self.inner.to_string())
            .finish()
    }
}

impl Error for CapturedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl PartialEq for CapturedError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for CapturedError {}

/// Plain-message error used by `msg`, `absent`, and panic normalization.
#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Error for Message {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::panic_any;

    #[rstest]
    fn message_errors_render_their_text() {
        assert_eq!(CapturedError::msg("boom").to_string(), "boom");
    }

    #[rstest]
    fn equality_compares_rendered_messages() {
        let from_msg = CapturedError::msg("invalid digit found in string");
        let from_error = CapturedError::new("x".parse::<i32>().unwrap_err());
        assert_eq!(from_msg, from_error);
    }

    #[rstest]
    fn str_panic_payload_keeps_message() {
        let payload = std::panic::catch_unwind(|| panic!("kept")).unwrap_err();
        assert_eq!(CapturedError::from_panic(payload).to_string(), "kept");
    }

    #[rstest]
    fn opaque_panic_payload_becomes_unknown() {
        let payload = std::panic::catch_unwind(|| panic_any(42_i32)).unwrap_err();
        assert_eq!(
            CapturedError::from_panic(payload).to_string(),
            "Unknown error"
        );
    }
}
