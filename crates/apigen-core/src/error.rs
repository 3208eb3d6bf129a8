//! Error types for apigen.
//!
//! This module provides the error hierarchy shared by all crates in the
//! workspace. Boundary errors (missing or empty input) carry enough detail
//! to distinguish the two cases; rendering defects are fatal for a run.
//!
//! # Examples
//!
//! ```
//! use apigen_core::{Error, Result};
//!
//! fn check_selection(count: usize) -> Result<usize> {
//!     if count == 0 {
//!         return Err(Error::EmptySelection);
//!     }
//!     Ok(count)
//! }
//!
//! let err = check_selection(0).unwrap_err();
//! assert!(err.is_empty_selection());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for apigen.
///
/// All errors in the system use this type, providing consistent error
/// handling across all crates in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// The selected-endpoint collection does not exist at its expected
    /// location.
    ///
    /// Surfaced to the caller; no output is written.
    #[error("selected endpoint set not found: {}", path.display())]
    SelectionNotFound {
        /// Location where the selection was expected
        path: PathBuf,
    },

    /// The selected-endpoint collection exists but contains no endpoints.
    ///
    /// Surfaced to the caller; no output is written.
    #[error("no endpoints in the selected set")]
    EmptySelection,

    /// Template registration or rendering failed.
    ///
    /// A rendering failure means a skeleton slot could not be resolved.
    /// This is an internal invariant violation and is fatal for the run:
    /// a partially-substituted skeleton is not valid source code, so
    /// nothing is written.
    #[error("template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying error cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when the endpoint JSON cannot be parsed.
    #[error("serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem operation failed.
    #[error("io error at {}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns `true` if this is a missing-selection error.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_core::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::SelectionNotFound {
    ///     path: PathBuf::from("output/selected_apis.json"),
    /// };
    /// assert!(err.is_selection_not_found());
    /// ```
    #[must_use]
    pub const fn is_selection_not_found(&self) -> bool {
        matches!(self, Self::SelectionNotFound { .. })
    }

    /// Returns `true` if this is an empty-selection error.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_core::Error;
    ///
    /// assert!(Error::EmptySelection.is_empty_selection());
    /// ```
    #[must_use]
    pub const fn is_empty_selection(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }

    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     message: "unresolved slot".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a serialization error.
    ///
    /// # Examples
    ///
    /// ```
    /// use apigen_core::Error;
    ///
    /// let err = Error::SerializationError {
    ///     message: "bad json".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_serialization_error());
    /// ```
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::SerializationError { .. })
    }
}

/// Result type alias for apigen operations.
///
/// # Examples
///
/// ```
/// use apigen_core::{Error, Result};
///
/// fn validate_method(method: &str) -> Result<()> {
///     if method.is_empty() {
///         return Err(Error::InvalidArgument("empty method".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_method("GET").is_ok());
/// assert!(validate_method("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
