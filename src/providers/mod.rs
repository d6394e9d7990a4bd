/*!
 * Translation providers.
 *
 * The form never talks to a backend directly: it hands a
 * [`TranslationRequest`] to a [`Provider`] and awaits the response inside a
 * spawned task. Only the mock provider ships today:
 * - `mock`: fixed delay followed by a canned target-language string
 */

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::categories::CategoryField;
use crate::errors::ProviderError;

pub mod mock;

pub use mock::{MockBehavior, MockProvider};

/// Everything a provider needs to translate one submission
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// Source text as entered
    pub text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
    /// Resolved category labels attached to the submission
    pub categories: BTreeMap<CategoryField, String>,
}

/// Provider output
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResponse {
    /// The translated text
    pub text: String,
}

/// Common trait for all translation backends
///
/// Implementations must be cheap to share behind an `Arc`, since every
/// submission runs the request on its own task.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Translate a request
    ///
    /// # Returns
    /// * `Result<TranslationResponse, ProviderError>` - The translation or an error
    async fn translate(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError>;
}
