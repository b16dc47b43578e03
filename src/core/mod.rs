//! Core domain types and abstractions

pub mod config;
pub mod error;
pub mod format;
pub mod log;
pub mod source;
pub mod summary;
pub mod transaction;

// Re-export main types for cleaner imports
pub use error::{FetchError, FieldErrors, SubmitError};
pub use source::TransactionSource;
pub use summary::Summary;
pub use transaction::{Transaction, TransactionKind};
