/*!
 * Tests for category profiles and selections
 */

use translation_agent::categories::{CategoryField, EMPTY_KEY, Profile};

/// Every strict table starts with the sentinel, relaxed tables never contain it
#[test]
fn test_profiles_withSentinel_shouldOnlyAppearInStrict() {
    for field in Profile::Strict.fields() {
        let options = Profile::Strict.options(field).unwrap();
        assert_eq!(options.iter().next(), Some((EMPTY_KEY, "")));
    }
    for field in Profile::Relaxed.fields() {
        let options = Profile::Relaxed.options(field).unwrap();
        assert!(!options.contains(EMPTY_KEY));
    }
}

/// Field order drives both the form and the history summary
#[test]
fn test_fields_withEachProfile_shouldKeepDisplayOrder() {
    assert_eq!(
        Profile::Strict.fields(),
        vec![
            CategoryField::TextType,
            CategoryField::Industry,
            CategoryField::TechnicalType,
            CategoryField::Country
        ]
    );
    assert_eq!(
        Profile::Relaxed.fields(),
        vec![CategoryField::Industry, CategoryField::TextType, CategoryField::Segment]
    );
}

#[test]
fn test_options_withKnownTables_shouldHaveExpectedSizes() {
    let size = |profile: Profile, field| profile.options(field).map(|o| o.len());
    assert_eq!(size(Profile::Strict, CategoryField::TextType), Some(9));
    assert_eq!(size(Profile::Strict, CategoryField::Industry), Some(7));
    assert_eq!(size(Profile::Strict, CategoryField::TechnicalType), Some(4));
    assert_eq!(size(Profile::Strict, CategoryField::Country), Some(6));
    assert_eq!(size(Profile::Strict, CategoryField::Segment), None);
    assert_eq!(size(Profile::Relaxed, CategoryField::Segment), Some(3));
}

#[test]
fn test_profile_fromStr_shouldParseNames() {
    assert_eq!("STRICT".parse::<Profile>().unwrap(), Profile::Strict);
    assert_eq!("relaxed".parse::<Profile>().unwrap(), Profile::Relaxed);
    assert!("loose".parse::<Profile>().is_err());
    assert_eq!(Profile::Relaxed.to_string(), "relaxed");
}

#[test]
fn test_profile_serde_shouldUseLowercaseNames() {
    assert_eq!(serde_json::to_string(&Profile::Strict).unwrap(), "\"strict\"");
    let parsed: Profile = serde_json::from_str("\"relaxed\"").unwrap();
    assert_eq!(parsed, Profile::Relaxed);
}
