use thiserror::Error;

/// Failures reported by a statement while binding parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// Positions are 1-based and bounded by the statement's parameter count.
    #[error("Parameter position {position} out of range (statement has {count} parameters)")]
    PositionOutOfRange { position: usize, count: usize },

    /// The statement was closed and no longer accepts parameters.
    #[error("Statement is closed")]
    Closed,

    /// A parameter was never bound before execution.
    #[error("Parameter at position {0} is not bound")]
    Unbound(usize),
}
