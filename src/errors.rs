/*!
 * Error types for the translation agent.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions. The `Display` output
 * of [`FormError`] is exactly the text shown in the error banner.
 */

use thiserror::Error;

use crate::categories::CategoryField;

/// Errors that can occur inside a translation provider
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The provider could not produce a translation
    #[error("Translation request failed: {0}")]
    RequestFailed(String),

    /// The provider returned nothing usable
    #[error("Provider returned an empty translation")]
    EmptyResponse,

    /// The running task was aborted before it finished
    #[error("Translation task was cancelled")]
    Cancelled,
}

/// Errors that can occur when writing to the clipboard
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipboardError {
    /// No clipboard backend could be opened
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Errors raised by form operations
///
/// Validation and failure variants render as the user-visible banner text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// Source text is empty or whitespace only
    #[error("Please enter text to translate")]
    EmptySourceText,

    /// A mandatory category has not been chosen
    #[error("Please select a {}", .0.label())]
    MissingCategory(CategoryField),

    /// A translation is already in flight
    #[error("A translation is already in progress")]
    Busy,

    /// The field is not part of the active profile
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// The key is not one of the field's options
    #[error("Unknown option '{key}' for {field}")]
    UnknownOption {
        /// Field being updated
        field: CategoryField,
        /// Rejected key
        key: String,
    },

    /// The translation task failed
    #[error("Translation failed. Please try again.")]
    TranslationFailed(#[source] ProviderError),

    /// The clipboard write failed
    #[error("Failed to copy to clipboard")]
    CopyFailed(#[source] ClipboardError),
}

impl FormError {
    /// Whether this error is shown in the banner
    ///
    /// Usage errors that the rendered controls cannot produce are only
    /// returned to the caller.
    pub fn is_user_visible(&self) -> bool {
        !matches!(
            self,
            Self::Busy | Self::UnknownField(_) | Self::UnknownOption { .. }
        )
    }
}
