use thiserror::Error;

/// Error returned by [`FormController::submit`](crate::FormController::submit).
///
/// Every variant is recoverable: the page shows the display text and stays
/// usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The computation module has not finished loading, or its load failed.
    #[error("not ready")]
    NotReady,
    /// The input was empty after trimming whitespace.
    #[error("empty input")]
    EmptyInput,
    /// The computation itself failed. The message is the error's display
    /// text, forwarded verbatim.
    #[error("{0}")]
    Computation(String),
}

/// Error produced when the one-shot module load fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct LoadError(pub String);

impl LoadError {
    /// Creates a load error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
