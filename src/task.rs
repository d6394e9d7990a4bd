use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::task::{AbortHandle, JoinError, JoinHandle};

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationRequest, TranslationResponse};

/// A translation running on its own tokio task
///
/// Awaiting the task yields the provider's result. Aborting it through its
/// [`AbortHandle`] resolves the await with [`ProviderError::Cancelled`].
#[derive(Debug)]
pub struct TranslationTask {
    handle: JoinHandle<Result<TranslationResponse, ProviderError>>,
}

impl TranslationTask {
    /// Start translating `request` with `provider`
    pub fn spawn(provider: Arc<dyn Provider>, request: TranslationRequest) -> Self {
        let handle = tokio::spawn(async move { provider.translate(request).await });
        Self { handle }
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }
}

fn join_error_to_provider(error: JoinError) -> ProviderError {
    if error.is_cancelled() {
        ProviderError::Cancelled
    } else {
        ProviderError::RequestFailed(format!("Translation task panicked: {}", error))
    }
}

impl Future for TranslationTask {
    type Output = Result<TranslationResponse, ProviderError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|joined| joined.unwrap_or_else(|e| Err(join_error_to_provider(e))))
    }
}
