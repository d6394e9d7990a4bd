/*!
 * The translation form controller.
 *
 * `TranslationForm` owns every piece of mutable view state: source text,
 * translated text, category selection, loading flag, the error banner, the
 * copied feedback and the audit log. Clones share that state, so a clone can
 * be moved into a spawned task while the original keeps serving reads.
 *
 * Submission follows `idle -> loading -> idle`. The translation itself runs
 * as a [`TranslationTask`] on whatever [`Provider`] the form was built with.
 */

use chrono::Utc;
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;

use crate::app_config::Config;
use crate::audit::{AuditLog, AuditLogEntry};
use crate::categories::{CategoryField, Profile, Selection};
use crate::clipboard::Clipboard;
use crate::errors::{FormError, ProviderError};
use crate::providers::{MockBehavior, MockProvider, Provider, TranslationRequest};
use crate::task::TranslationTask;
use crate::transient::Transient;

/// Limits, timers and labels the form runs with
#[derive(Debug, Clone, PartialEq)]
pub struct FormSettings {
    pub max_source_chars: usize,
    pub error_display: Duration,
    pub copied_feedback: Duration,
    pub output_format: String,
    pub source_language: String,
    pub target_language: String,
}

impl FormSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_source_chars: config.max_source_chars,
            error_display: config.timing.error_display(),
            copied_feedback: config.timing.copied_feedback(),
            output_format: config.output_format.clone(),
            source_language: config.source_language.clone(),
            target_language: config.target_language.clone(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug)]
struct FormState {
    source_text: String,
    translated_text: String,
    selection: Selection,
    loading: bool,
    log: AuditLog,
}

/// Point-in-time copy of everything the view renders
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    pub profile: Profile,
    pub settings: FormSettings,
    pub source_text: String,
    pub translated_text: String,
    pub selection: Selection,
    pub loading: bool,
    pub error: Option<String>,
    pub copied: bool,
    pub can_submit: bool,
    pub log: AuditLog,
}

impl FormSnapshot {
    pub fn char_count(&self) -> usize {
        self.source_text.chars().count()
    }
}

/// Resets the loading flag however the submission ends, and cancels the
/// translation if the submitting future is dropped early
struct LoadingGuard {
    state: Arc<Mutex<FormState>>,
    task: Option<AbortHandle>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state.lock().loading = false;
    }
}

/// Form controller shared between the view and background tasks
#[derive(Debug, Clone)]
pub struct TranslationForm {
    profile: Profile,
    settings: Arc<FormSettings>,
    state: Arc<Mutex<FormState>>,
    error: Transient<String>,
    copied: Transient<bool>,
    provider: Arc<dyn Provider>,
    clipboard: Arc<dyn Clipboard>,
}

impl TranslationForm {
    pub fn new(
        profile: Profile,
        settings: FormSettings,
        provider: Arc<dyn Provider>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let state = FormState {
            source_text: String::new(),
            translated_text: String::new(),
            selection: profile.initial_selection(),
            loading: false,
            log: AuditLog::new(),
        };
        Self {
            profile,
            settings: Arc::new(settings),
            state: Arc::new(Mutex::new(state)),
            error: Transient::new(),
            copied: Transient::new(),
            provider,
            clipboard,
        }
    }

    /// Build a form backed by the mock provider configured in `config`
    pub fn from_config(config: &Config, clipboard: Arc<dyn Clipboard>) -> Self {
        let provider = MockProvider::new(MockBehavior::Placeholder, config.timing.translation_delay())
            .with_output(config.placeholder_translation.clone());
        Self::new(
            config.profile,
            FormSettings::from_config(config),
            Arc::new(provider),
            clipboard,
        )
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Replace the source text
    ///
    /// Values longer than the limit are ignored and the previous text is kept.
    /// Returns whether the value was accepted.
    pub fn update_source_text(&self, text: impl Into<String>) -> bool {
        let text = text.into();
        let len = text.chars().count();
        if len > self.settings.max_source_chars {
            debug!(
                "Ignoring source text of {} chars (limit {})",
                len, self.settings.max_source_chars
            );
            return false;
        }
        self.state.lock().source_text = text;
        true
    }

    /// Overwrite one field of the selection
    pub fn update_category(&self, field: CategoryField, key: &str) -> Result<(), FormError> {
        let options = self
            .profile
            .options(field)
            .ok_or_else(|| FormError::UnknownField(field.key().to_string()))?;
        if !options.contains(key) {
            return Err(FormError::UnknownOption {
                field,
                key: key.to_string(),
            });
        }
        debug!("{} -> {}", field.key(), key);
        self.state.lock().selection.set(field, key);
        Ok(())
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        let state = self.state.lock();
        !state.loading && self.validate(&state).is_ok()
    }

    fn validate(&self, state: &FormState) -> Result<(), FormError> {
        if state.source_text.trim().is_empty() {
            return Err(FormError::EmptySourceText);
        }
        if self.profile.requires_all_fields() {
            if let Some(field) = state.selection.first_missing(self.profile) {
                return Err(FormError::MissingCategory(field));
            }
        }
        Ok(())
    }

    /// Run one mock translation
    ///
    /// On success the translated text is replaced and a new entry is recorded
    /// at the front of the log, built from the selection and time at which
    /// the submission started. Loading is cleared however this ends.
    pub async fn submit(&self) -> Result<(), FormError> {
        let (request, pending_entry) = {
            let mut state = self.state.lock();
            if state.loading {
                return Err(FormError::Busy);
            }
            if let Err(e) = self.validate(&state) {
                drop(state);
                self.show_error(&e);
                return Err(e);
            }
            state.loading = true;

            let categories = state.selection.resolve(self.profile);
            let request = TranslationRequest {
                text: state.source_text.clone(),
                source_language: self.settings.source_language.clone(),
                target_language: self.settings.target_language.clone(),
                categories: categories.clone(),
            };
            let entry = AuditLogEntry::new(
                Utc::now(),
                categories,
                self.settings.output_format.clone(),
                state.source_text.chars().count(),
            );
            (request, entry)
        };
        self.error.clear();

        info!(
            "Translating {} chars with {} provider",
            pending_entry.source_chars(),
            self.provider.name()
        );
        let task = TranslationTask::spawn(Arc::clone(&self.provider), request);
        let mut guard = LoadingGuard {
            state: Arc::clone(&self.state),
            task: Some(task.abort_handle()),
        };
        let outcome = task.await;
        guard.task = None;

        let result = match outcome {
            Ok(response) if response.text.is_empty() => Err(ProviderError::EmptyResponse),
            Ok(response) => {
                let mut state = self.state.lock();
                state.translated_text = response.text;
                state.log.record(pending_entry);
                Ok(())
            }
            Err(e) => Err(e),
        };
        drop(guard);

        result.map_err(|e| {
            let err = FormError::TranslationFailed(e);
            self.show_error(&err);
            err
        })
    }

    /// Copy the translated text to the clipboard
    pub async fn copy_output(&self) -> Result<(), FormError> {
        let text = self.translated_text();
        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                self.copied.set(true, self.settings.copied_feedback);
                Ok(())
            }
            Err(e) => {
                let err = FormError::CopyFailed(e);
                self.show_error(&err);
                Err(err)
            }
        }
    }

    fn show_error(&self, error: &FormError) {
        if !error.is_user_visible() {
            return;
        }
        warn!("{}", error);
        self.error.set(error.to_string(), self.settings.error_display);
    }

    pub fn source_text(&self) -> String {
        self.state.lock().source_text.clone()
    }

    pub fn char_count(&self) -> usize {
        self.state.lock().source_text.chars().count()
    }

    pub fn translated_text(&self) -> String {
        self.state.lock().translated_text.clone()
    }

    pub fn selection(&self) -> Selection {
        self.state.lock().selection.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Message currently in the error banner
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn is_copied(&self) -> bool {
        self.copied.get().unwrap_or(false)
    }

    /// Copy of the audit log, newest first
    pub fn audit_log(&self) -> AuditLog {
        self.state.lock().log.clone()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.state.lock();
        let can_submit = !state.loading && self.validate(&state).is_ok();
        FormSnapshot {
            profile: self.profile,
            settings: (*self.settings).clone(),
            source_text: state.source_text.clone(),
            translated_text: state.translated_text.clone(),
            selection: state.selection.clone(),
            loading: state.loading,
            error: self.error.get(),
            copied: self.copied.get().unwrap_or(false),
            can_submit,
            log: state.log.clone(),
        }
    }
}
