//! Error type for the optional checked-decode wrappers.
//!
//! The core `_enc`/`_dec` functions never validate their arguments — callers
//! are expected to pre-size buffers correctly, the same contract the
//! reference codec uses. `SvbError` exists only for the `checked_*` wrappers
//! in each codec module, for callers that would rather get a `Result` than
//! an out-of-bounds panic when decoding untrusted input.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SvbError {
    #[error("output buffer too small: need at least {needed} bytes, got {got}")]
    OutputTooSmall { needed: usize, got: usize },

    #[error("truncated input: need at least {needed} bytes to decode {count} elements, got {got}")]
    TruncatedInput {
        needed: usize,
        got: usize,
        count: usize,
    },

    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}
