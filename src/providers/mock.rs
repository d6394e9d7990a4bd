/*!
 * Mock translation provider.
 *
 * Stands in for a real backend: it waits a fixed delay to simulate network
 * latency and then answers with a constant placeholder, whatever the input.
 * The alternative behaviors exist so the failure paths of the form can be
 * exercised:
 * - `MockProvider::placeholder()` - Delay, then the placeholder text
 * - `MockProvider::failing()` - Delay, then an error
 * - `MockProvider::empty()` - Delay, then an empty answer
 */

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest, TranslationResponse};

/// Placeholder produced by the mock translation
pub const PLACEHOLDER_TRANSLATION: &str = "نص مترجم مثال. هذا مثال على النص المترجم إلى العربية.";

/// Simulated latency of the mock translation
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the placeholder
    Placeholder,
    /// Always fails with an error
    Failing,
    /// Returns an empty response
    Empty,
}

/// Mock provider that simulates latency and returns a fixed string
#[derive(Debug, Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    delay: Duration,
    output: String,
    /// Shared across clones
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior and delay
    pub fn new(behavior: MockBehavior, delay: Duration) -> Self {
        Self {
            behavior,
            delay,
            output: PLACEHOLDER_TRANSLATION.to_string(),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The default mock: 1.5 s delay, then the Arabic placeholder
    pub fn placeholder() -> Self {
        Self::new(MockBehavior::Placeholder, DEFAULT_DELAY)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing, DEFAULT_DELAY)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty, DEFAULT_DELAY)
    }

    /// Override the simulated latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Override the canned output
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn translate(&self, request: TranslationRequest) -> Result<TranslationResponse, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "Mock translation #{} ({} chars, {} -> {})",
            count,
            request.text.chars().count(),
            request.source_language,
            request.target_language
        );

        tokio::time::sleep(self.delay).await;

        match self.behavior {
            MockBehavior::Placeholder => Ok(TranslationResponse {
                text: self.output.clone(),
            }),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(format!(
                "Simulated provider failure (request #{})",
                count
            ))),
            MockBehavior::Empty => Ok(TranslationResponse { text: String::new() }),
        }
    }
}
