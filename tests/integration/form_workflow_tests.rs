/*!
 * End-to-end tests of the form: editing, submitting, copying and the
 * self-clearing banner, all on a paused tokio clock.
 */

use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

use translation_agent::errors::{FormError, ProviderError};
use translation_agent::providers::MockProvider;
use translation_agent::providers::mock::PLACEHOLDER_TRANSLATION;
use translation_agent::view;
use translation_agent::{CategoryField, Profile};

use crate::common;

/// Text up to the limit is taken verbatim, longer text is ignored
#[test]
fn test_update_source_text_withLengthAroundLimit_shouldRejectOnlyOverLimit() {
    let (form, _) = common::create_form(Profile::Relaxed);

    assert!(form.update_source_text("Hello"));
    assert_eq!(form.source_text(), "Hello");

    let at_limit = "a".repeat(10_000);
    assert!(form.update_source_text(at_limit.clone()));
    assert_eq!(form.source_text(), at_limit);

    assert!(!form.update_source_text("b".repeat(10_001)));
    assert_eq!(form.source_text(), at_limit);

    assert!(form.update_source_text(""));
    assert_eq!(form.char_count(), 0);
}

/// Blank input never reaches the provider or the log
#[tokio::test(start_paused = true)]
async fn test_submit_withBlankText_shouldSetValidationErrorOnly() {
    let (form, _) = common::create_form(Profile::Relaxed);

    for blank in ["", "   ", "\n\t "] {
        form.update_source_text(blank);
        assert_eq!(form.submit().await, Err(FormError::EmptySourceText));
        assert_eq!(form.error().as_deref(), Some("Please enter text to translate"));
        assert!(form.audit_log().is_empty());
        assert!(!form.is_loading());
        assert_eq!(form.translated_text(), "");
    }
}

/// The example submission from the relaxed profile
#[tokio::test(start_paused = true)]
async fn test_submit_withRelaxedExample_shouldRecordResolvedLabels() {
    let (form, _) = common::create_form(Profile::Relaxed);
    form.update_source_text("Hello");
    assert_ok!(form.update_category(CategoryField::Industry, "legal"));
    assert_ok!(form.update_category(CategoryField::TextType, "technical-documentation"));
    assert_ok!(form.update_category(CategoryField::Segment, "b2b"));

    let before = chrono::Utc::now();
    assert_ok!(form.submit().await);

    assert_eq!(form.translated_text(), PLACEHOLDER_TRANSLATION);
    let log = form.audit_log();
    assert_eq!(log.len(), 1);
    let entry = log.get(0).unwrap();
    assert_eq!(entry.label(CategoryField::Industry), Some("Legal"));
    assert_eq!(entry.label(CategoryField::TextType), Some("Technical Documentation"));
    assert_eq!(entry.label(CategoryField::Segment), Some("B2B"));
    assert_eq!(entry.label(CategoryField::Country), None);
    assert_eq!(entry.format(), "PDF");
    assert_eq!(entry.source_chars(), 5);
    assert!(entry.timestamp() >= before);
}

/// Output appears only after the simulated latency
#[tokio::test(start_paused = true)]
async fn test_submit_withValidInput_shouldLoadForTheDelay() {
    let (form, _) = common::create_form(Profile::Relaxed);
    form.update_source_text("Hello");

    let background = form.clone();
    let handle = tokio::spawn(async move { background.submit().await });

    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert!(form.is_loading());
    assert_eq!(form.translated_text(), "");
    assert!(form.audit_log().is_empty());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!form.is_loading());
    assert_eq!(form.translated_text(), PLACEHOLDER_TRANSLATION);
    assert_eq!(form.audit_log().len(), 1);
    assert_ok!(handle.await.unwrap());
}

/// Labels are captured when the submission starts
#[tokio::test(start_paused = true)]
async fn test_submit_withSelectionChangedMidFlight_shouldKeepSubmitTimeLabels() {
    let (form, _) = common::create_complete_strict_form();
    form.update_source_text("Hello");

    let background = form.clone();
    let handle = tokio::spawn(async move { background.submit().await });
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_ok!(form.update_category(CategoryField::Country, "kuwait"));
    assert_ok!(handle.await.unwrap());

    let entry = form.audit_log().latest().cloned().unwrap();
    assert_eq!(entry.label(CategoryField::Country), Some("UAE"));
    assert_eq!(entry.label(CategoryField::TextType), Some("Page Title"));
    assert_eq!(entry.label(CategoryField::Industry), Some("Telecom"));
    assert_eq!(entry.label(CategoryField::TechnicalType), Some("Marketing"));
}

/// Repeated submissions read newest first
#[tokio::test(start_paused = true)]
async fn test_submit_repeatedly_shouldOrderLogNewestFirst() {
    let (form, _) = common::create_form(Profile::Relaxed);
    form.update_source_text("Hello");

    let industries = ["legal", "finance", "healthcare", "technology"];
    for industry in industries {
        assert_ok!(form.update_category(CategoryField::Industry, industry));
        assert_ok!(form.submit().await);
    }

    let log = form.audit_log();
    assert_eq!(log.len(), industries.len());
    let labels: Vec<&str> = log
        .iter()
        .map(|entry| entry.label(CategoryField::Industry).unwrap())
        .collect();
    assert_eq!(labels, vec!["Technology", "Healthcare", "Finance", "Legal"]);

    let timestamps: Vec<_> = log.iter().map(|entry| entry.timestamp()).collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] >= pair[1]));
}

/// Strict mode names the first unset category
#[tokio::test(start_paused = true)]
async fn test_submit_withStrictMissingCategory_shouldReportField() {
    let (form, _) = common::create_form(Profile::Strict);
    form.update_source_text("Hello");
    assert!(!form.can_submit());

    assert_eq!(form.submit().await, Err(FormError::MissingCategory(CategoryField::TextType)));
    assert_eq!(form.error().as_deref(), Some("Please select a Text Type"));

    assert_ok!(form.update_category(CategoryField::TextType, "body"));
    assert_ok!(form.update_category(CategoryField::Industry, "energy"));
    assert_ok!(form.update_category(CategoryField::TechnicalType, "cv-content"));
    assert_eq!(form.submit().await, Err(FormError::MissingCategory(CategoryField::Country)));

    assert_ok!(form.update_category(CategoryField::Country, "bahrain"));
    assert!(form.can_submit());
    assert_ok!(form.submit().await);
    assert_eq!(form.audit_log().len(), 1);
}

/// Selecting the sentinel again makes the field unset
#[test]
fn test_can_submit_withSentinelReselected_shouldDisable() {
    let (form, _) = common::create_complete_strict_form();
    form.update_source_text("Hello");
    assert!(form.can_submit());
    assert_ok!(form.update_category(CategoryField::Industry, "empty"));
    assert!(!form.can_submit());
}

/// A successful submit clears an earlier banner
#[tokio::test(start_paused = true)]
async fn test_submit_afterValidationError_shouldClearBanner() {
    let (form, _) = common::create_form(Profile::Relaxed);
    assert_err!(form.submit().await);
    assert!(form.error().is_some());

    form.update_source_text("Hello");
    let background = form.clone();
    let handle = tokio::spawn(async move { background.submit().await });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(form.error(), None);
    assert_ok!(handle.await.unwrap());
}

/// Provider failures surface the generic message and leave the log alone
#[tokio::test(start_paused = true)]
async fn test_submit_withFailingProvider_shouldSurfaceFailure() {
    let form = common::create_form_with_provider(Profile::Relaxed, MockProvider::failing());
    form.update_source_text("Hello");

    let result = form.submit().await;
    assert!(matches!(
        result,
        Err(FormError::TranslationFailed(ProviderError::RequestFailed(_)))
    ));
    assert_eq!(form.error().as_deref(), Some("Translation failed. Please try again."));
    assert!(form.audit_log().is_empty());
    assert!(!form.is_loading());
    assert_eq!(form.translated_text(), "");
}

#[tokio::test(start_paused = true)]
async fn test_submit_withEmptyProviderResponse_shouldSurfaceFailure() {
    let form = common::create_form_with_provider(Profile::Relaxed, MockProvider::empty());
    form.update_source_text("Hello");

    assert_eq!(
        form.submit().await,
        Err(FormError::TranslationFailed(ProviderError::EmptyResponse))
    );
    assert!(form.audit_log().is_empty());
}

/// The translated text is overwritten wholesale
#[tokio::test(start_paused = true)]
async fn test_submit_withNewOutput_shouldReplaceTranslatedText() {
    let form = common::create_form_with_provider(
        Profile::Relaxed,
        MockProvider::placeholder().with_output("أول"),
    );
    form.update_source_text("first");
    assert_ok!(form.submit().await);
    assert_eq!(form.translated_text(), "أول");
}

/// Copy feedback lasts exactly two seconds
#[tokio::test(start_paused = true)]
async fn test_copy_output_withWorkingClipboard_shouldShowFeedbackForTwoSeconds() {
    let (form, clipboard) = common::create_form(Profile::Relaxed);
    form.update_source_text("Hello");
    assert_ok!(form.submit().await);

    assert_ok!(form.copy_output().await);
    assert_eq!(clipboard.contents().as_deref(), Some(PLACEHOLDER_TRANSLATION));
    assert!(form.is_copied());

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(form.is_copied());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!form.is_copied());
}

/// Clipboard failures go through the banner
#[tokio::test(start_paused = true)]
async fn test_copy_output_withBrokenClipboard_shouldSetError() {
    let form = common::create_form_with_broken_clipboard(Profile::Relaxed);

    let result = form.copy_output().await;
    assert!(matches!(result, Err(FormError::CopyFailed(_))));
    assert_eq!(form.error().as_deref(), Some("Failed to copy to clipboard"));
    assert!(!form.is_copied());

    // The returned error reads the same as the banner
    let err = result.unwrap_err();
    assert_eq!(Some(format!("! {}", err)), view::render_error(&form.snapshot()));
}

/// The banner clears itself after five seconds
#[tokio::test(start_paused = true)]
async fn test_error_withoutReplacement_shouldClearAfterFiveSeconds() {
    let (form, _) = common::create_form(Profile::Relaxed);
    assert_err!(form.submit().await);

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(form.error().is_some());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(form.error(), None);
}

/// A newer error restarts the five second window
#[tokio::test(start_paused = true)]
async fn test_error_withReplacement_shouldKeepLatestForFullPeriod() {
    let form = common::create_form_with_broken_clipboard(Profile::Relaxed);
    assert_err!(form.submit().await);

    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_err!(form.copy_output().await);
    assert_eq!(form.error().as_deref(), Some("Failed to copy to clipboard"));

    // The first error's timer would have fired here
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(form.error().as_deref(), Some("Failed to copy to clipboard"));

    tokio::time::sleep(Duration::from_millis(3001)).await;
    assert_eq!(form.error(), None);
}

/// Usage errors stay out of the banner
#[test]
fn test_update_category_withUnknownKey_shouldNotTouchBanner() {
    let (form, _) = common::create_form(Profile::Strict);
    let result = form.update_category(CategoryField::Industry, "mining");
    assert!(matches!(result, Err(FormError::UnknownOption { .. })));
    assert_eq!(form.selection().get(CategoryField::Industry), Some("empty"));
    assert_eq!(form.error(), None);
}
