use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Language utilities for the panel headers
///
/// Validates ISO 639-1 (2-letter) and ISO 639-2 (3-letter) codes and turns
/// them into the short badge and display name shown above each text panel.
/// ISO 639-2/B codes that differ from their 639-2/T form
static BIBLIOGRAPHIC_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("fre", "fra"),
        ("ger", "deu"),
        ("dut", "nld"),
        ("gre", "ell"),
        ("chi", "zho"),
        ("cze", "ces"),
        ("ice", "isl"),
        ("alb", "sqi"),
        ("arm", "hye"),
        ("baq", "eus"),
        ("bur", "mya"),
        ("per", "fas"),
        ("geo", "kat"),
        ("may", "msa"),
        ("mac", "mkd"),
        ("rum", "ron"),
        ("slo", "slk"),
        ("wel", "cym"),
    ])
});

// Scripts written right to left, by ISO 639-3 code
const RIGHT_TO_LEFT: &[&str] = &["ara", "heb", "fas", "urd", "yid", "pus", "snd", "uig", "div"];

fn lookup(code: &str) -> Result<Language> {
    let normalized_code = code.trim().to_lowercase();
    let found = match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => {
            let part2t = BIBLIOGRAPHIC_CODES
                .get(normalized_code.as_str())
                .copied()
                .unwrap_or(normalized_code.as_str());
            Language::from_639_3(part2t)
        }
        _ => None,
    };
    found.ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    Ok(lookup(code)?.to_name().to_string())
}

/// Short uppercase badge for a panel header, e.g. `EN`
///
/// Uses the 2-letter code when the language has one.
pub fn badge(code: &str) -> Result<String> {
    let lang = lookup(code)?;
    let short = lang.to_639_1().unwrap_or_else(|| lang.to_639_3());
    Ok(short.to_uppercase())
}

/// Whether text in this language is laid out right to left
pub fn is_right_to_left(code: &str) -> bool {
    lookup(code)
        .map(|lang| RIGHT_TO_LEFT.contains(&lang.to_639_3()))
        .unwrap_or(false)
}
