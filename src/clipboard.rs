/*!
 * Write-only clipboard access.
 *
 * - `SystemClipboard`: the host clipboard through `cli-clipboard`
 * - `MemoryClipboard`: keeps the last copied text in process, for headless
 *   sessions and tests
 */

use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::ClipboardError;

/// A clipboard the form can copy its output to
#[async_trait]
pub trait Clipboard: Send + Sync + Debug {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The host platform clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        use cli_clipboard::{ClipboardContext, ClipboardProvider};

        let contents = text.to_string();
        // Platform clipboard calls block, keep them off the event loop
        tokio::task::spawn_blocking(move || {
            let mut ctx = ClipboardContext::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            ctx.set_contents(contents)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))??;

        debug!("Copied {} chars to system clipboard", text.chars().count());
        Ok(())
    }
}

/// In-process clipboard
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last copied text
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}
