use thiserror::Error;

/// Errors produced by the fallible twins of the asserting APIs
/// ([`UnitString::try_from_terminated`], [`UnitString::try_substring`]).
///
/// The core contract of the container is assertion-based: callers
/// guarantee preconditions, and violations panic. These variants exist for
/// call sites that validate untrusted input at runtime instead.
///
/// [`UnitString::try_from_terminated`]: crate::UnitString::try_from_terminated
/// [`UnitString::try_substring`]: crate::UnitString::try_substring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnitStrError {
    /// A raw sequence handed to a `*_terminated` constructor did not end
    /// with the zero unit.
    #[error("raw sequence is not NUL-terminated")]
    MissingTerminator,

    /// A start offset was past the logical length.
    #[error("start {start} out of range for length {len}")]
    OutOfBounds {
        /// The offending offset.
        start: usize,
        /// The container's logical length at the time of the call.
        len: usize,
    },
}
