//! Failures that can reach the boundary of the update pipeline.
//!
//! Field validation failures are not errors here: they are resolved inside
//! the submission controller and rendered by the presenter.

use thiserror::Error;

/// A simulation response that breaks the series invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedSeries {
    #[error("response is missing the `{0}` array")]
    MissingArray(&'static str),

    #[error("array `{array}` has {found} samples, expected {expected}")]
    LengthMismatch {
        array: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("response body is not a simulation series: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("no response within {0} ms")]
    Timeout(u32),

    #[error(transparent)]
    Malformed(#[from] MalformedSeries),
}
