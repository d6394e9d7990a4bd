/*!
 * Plain-text rendering of the form.
 *
 * Every function takes a [`FormSnapshot`] so rendering never holds the form's
 * lock. Panels are separated by horizontal rules and printed top to bottom:
 * header, source, categories, submit button, output, history, error banner.
 */

use std::fmt::Write;

use crate::categories::{CategoryField, Profile};
use crate::form::FormSnapshot;
use crate::language_utils;
use crate::select::Select;

pub const APP_TITLE: &str = "S&B AI Translation Agent";
pub const OUTPUT_PLACEHOLDER: &str = "سيظهر النص المترجم هنا...";
pub const LOG_TITLE: &str = "Activity Log";
pub const EMPTY_HISTORY: &str = "No translation history yet";

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Group digits in threes, e.g. `10000` -> `10,000`
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn panel_heading(code: &str, title: &str) -> String {
    let badge = language_utils::badge(code).unwrap_or_else(|_| code.to_uppercase());
    match language_utils::get_language_name(code) {
        Ok(name) => format!("[{}] {} ({})", badge, title, name),
        Err(_) => format!("[{}] {}", badge, title),
    }
}

pub fn render_header() -> String {
    format!("{}\n{}\n", APP_TITLE, rule())
}

pub fn render_source_panel(snapshot: &FormSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", panel_heading(&snapshot.settings.source_language, "Source Text"));
    if snapshot.source_text.is_empty() {
        let _ = writeln!(out, "  Enter text to translate...");
    } else {
        for line in snapshot.source_text.lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }
    let _ = writeln!(
        out,
        "{:>width$}",
        format!(
            "{}/{}",
            snapshot.char_count(),
            format_count(snapshot.settings.max_source_chars)
        ),
        width = RULE_WIDTH
    );
    out
}

pub fn render_selects(snapshot: &FormSnapshot, expanded: bool) -> String {
    let mut out = String::new();
    for field in snapshot.profile.fields() {
        let Some(options) = snapshot.profile.options(field) else {
            continue;
        };
        let value = snapshot.selection.get(field).unwrap_or_default();
        let select = Select::new(field.label(), options, value);
        if expanded {
            out.push_str(&select.render());
        } else {
            let _ = writeln!(out, "  {}", select.render_inline());
        }
    }
    out
}

pub fn render_submit_button(snapshot: &FormSnapshot) -> String {
    let label = if snapshot.loading {
        "Translating..."
    } else {
        "Translate Now"
    };
    if snapshot.can_submit {
        format!("[ {} ]", label)
    } else {
        format!("[ {} ] [disabled]", label)
    }
}

pub fn render_output_panel(snapshot: &FormSnapshot) -> String {
    let mut out = String::new();
    let copy_label = if snapshot.copied { "Copied!" } else { "Copy" };
    let heading = panel_heading(&snapshot.settings.target_language, "Translated Text");
    let _ = writeln!(out, "{}  <{}>", heading, copy_label);

    let text = if snapshot.translated_text.is_empty() {
        OUTPUT_PLACEHOLDER
    } else {
        snapshot.translated_text.as_str()
    };
    let right_to_left = language_utils::is_right_to_left(&snapshot.settings.target_language);
    for line in text.lines() {
        if right_to_left {
            let _ = writeln!(out, "{:>width$}", line, width = RULE_WIDTH);
        } else {
            let _ = writeln!(out, "  {}", line);
        }
    }
    out
}

pub fn render_history(snapshot: &FormSnapshot) -> String {
    let count = snapshot.log.len();
    let noun = if count == 1 { "entry" } else { "entries" };
    let mut out = format!("{}  {} {}\n", LOG_TITLE, count, noun);
    if snapshot.log.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_HISTORY);
        return out;
    }
    for entry in snapshot.log.iter() {
        let _ = writeln!(out, "  {}", entry.summary(snapshot.profile));
    }
    out
}

pub fn render_error(snapshot: &FormSnapshot) -> Option<String> {
    snapshot.error.as_ref().map(|message| format!("! {}", message))
}

/// The complete screen
pub fn render(snapshot: &FormSnapshot) -> String {
    let mut out = render_header();
    out.push_str(&render_source_panel(snapshot));
    out.push_str(&render_selects(snapshot, false));
    let _ = writeln!(out, "{}", render_submit_button(snapshot));
    let _ = writeln!(out, "{}", rule());
    out.push_str(&render_output_panel(snapshot));
    let _ = writeln!(out, "{}", rule());
    out.push_str(&render_history(snapshot));
    if let Some(banner) = render_error(snapshot) {
        let _ = writeln!(out, "{}", rule());
        let _ = writeln!(out, "{}", banner);
    }
    out
}

/// Every profile with its fields and option keys
pub fn render_profiles() -> String {
    let mut out = String::new();
    for profile in Profile::all() {
        let _ = writeln!(out, "{} - {}", profile, profile.display_name());
        for field in profile.fields() {
            let keys: Vec<&str> = profile
                .options(field)
                .map(|options| options.iter().map(|(key, _)| key).collect())
                .unwrap_or_default();
            let _ = writeln!(out, "  {:<14} {}", field.key(), keys.join(", "));
        }
    }
    out
}

/// Option list of one field, for the `options` command
pub fn render_field_options(snapshot: &FormSnapshot, field: CategoryField) -> Option<String> {
    let options = snapshot.profile.options(field)?;
    let value = snapshot.selection.get(field).unwrap_or_default();
    Some(Select::new(field.label(), options, value).render())
}
