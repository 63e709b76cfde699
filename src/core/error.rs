//! Library-wide result and error structures.

/// Errors surfaced by the evaluator API.
///
/// All failures are terminal: the caller must correct its input rather than
/// retry, and no partial curve is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Input validation error.
    InvalidInput(String),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for ProfileError {}
