//! Error types for morphe-session.

use thiserror::Error;

/// Errors surfaced to the user-facing layer by session operations.
///
/// These are validation guards, not faults: the embedding UI turns them into
/// notifications and the session state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The transform trigger was pressed with no points placed.
    #[error("cannot transform an empty point set")]
    EmptyPointSet,

    /// A parameter field was NaN or infinite.
    #[error("transform parameters must be finite")]
    NonFiniteParams,
}
