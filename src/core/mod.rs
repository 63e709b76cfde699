//! Common domain types and library-wide error structures.

pub mod error;
pub mod serialization;
pub mod types;

pub use error::ProfileError;
pub use types::*;
