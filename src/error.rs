use thiserror::Error;

/// Errors reported by the core. Construction is the only fallible public
/// entry point; every other operation is infallible and signals absence
/// through `Option`/`bool` rather than an error (see [`crate::Tree`]).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BTreeError {
    /// The requested degree was below the minimum of 2.
    #[error("b-tree degree must be at least 2, got {degree}")]
    InvalidDegree { degree: usize },
}
