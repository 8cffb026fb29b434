use edgewalk_core::{Point, Range};

/// Caller errors rejected before any search starts.
///
/// Search outcomes (blocked, budget exhausted) are not errors: they come back
/// as a partial [`PathState`](crate::PathState).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// `max_length` was zero, leaving no room even for the terminator.
    #[error("path: command buffer has zero capacity")]
    ZeroCapacity,
    /// The start or destination lies outside the map.
    #[error("path: {point} lies outside the map {range}")]
    OutOfRange { point: Point, range: Range },
    /// A [`PathConfig`](crate::PathConfig) limit is unusable.
    #[error("path: invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
