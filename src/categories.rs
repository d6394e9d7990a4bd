/*!
 * Category fields, their closed option tables, and the configuration profiles
 * that decide which fields a form shows and whether they are mandatory.
 */

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key of the "unselected" sentinel option
pub const EMPTY_KEY: &str = "empty";

/// A categorical field attached to every submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryField {
    TextType,
    Industry,
    TechnicalType,
    Country,
    Segment,
}

impl CategoryField {
    /// Human readable label shown next to the dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::TextType => "Text Type",
            Self::Industry => "Industry",
            Self::TechnicalType => "Technical Type",
            Self::Country => "Country",
            Self::Segment => "Segment",
        }
    }

    /// Identifier used in commands and serialized entries
    pub fn key(&self) -> &'static str {
        match self {
            Self::TextType => "textType",
            Self::Industry => "industry",
            Self::TechnicalType => "technicalType",
            Self::Country => "country",
            Self::Segment => "segment",
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for CategoryField {
    type Err = anyhow::Error;

    // Accepts the camelCase key, a kebab/snake spelling, or the label
    fn from_str(s: &str) -> Result<Self> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "texttype" => Ok(Self::TextType),
            "industry" => Ok(Self::Industry),
            "technicaltype" => Ok(Self::TechnicalType),
            "country" => Ok(Self::Country),
            "segment" => Ok(Self::Segment),
            _ => Err(anyhow!("Invalid category field: {}", s)),
        }
    }
}

/// Ordered, closed mapping of option keys to display labels
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOptions {
    entries: Vec<(&'static str, &'static str)>,
}

impl CategoryOptions {
    fn new(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Display label for a key, if the key belongs to this table
    pub fn label_for(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.label_for(key).is_some()
    }

    /// Options in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn first_key(&self) -> &'static str {
        self.entries.first().map(|(k, _)| *k).unwrap_or(EMPTY_KEY)
    }
}

type FieldTable = Vec<(CategoryField, CategoryOptions)>;

static STRICT_TABLE: Lazy<FieldTable> = Lazy::new(|| {
    vec![
        (
            CategoryField::TextType,
            CategoryOptions::new(&[
                (EMPTY_KEY, ""),
                ("body", "Body"),
                ("paragraphHeader", "Paragraph Header"),
                ("pageTitle", "Page Title"),
                ("formals", "Formals"),
                ("table", "Table"),
                ("shape", "Shape"),
                ("structure", "Structure"),
                ("timeline", "Timeline"),
            ]),
        ),
        (
            CategoryField::Industry,
            CategoryOptions::new(&[
                (EMPTY_KEY, ""),
                ("realEstate", "Real Estate"),
                ("telecom", "Telecom"),
                ("publicSector", "Public Sector"),
                ("energy", "Energy"),
                ("healthcare", "Healthcare"),
                ("social", "Social"),
            ]),
        ),
        (
            CategoryField::TechnicalType,
            CategoryOptions::new(&[
                (EMPTY_KEY, ""),
                ("general-content", "General"),
                ("marketing-content", "Marketing"),
                ("cv-content", "CV"),
            ]),
        ),
        (
            CategoryField::Country,
            CategoryOptions::new(&[
                (EMPTY_KEY, ""),
                ("uae", "UAE"),
                ("ksa", "KSA"),
                ("bahrain", "Bahrain"),
                ("qatar", "Qatar"),
                ("kuwait", "Kuwait"),
            ]),
        ),
    ]
});

static RELAXED_TABLE: Lazy<FieldTable> = Lazy::new(|| {
    vec![
        (
            CategoryField::Industry,
            CategoryOptions::new(&[
                ("legal", "Legal"),
                ("finance", "Finance"),
                ("healthcare", "Healthcare"),
                ("technology", "Technology"),
                ("retail", "Retail"),
            ]),
        ),
        (
            CategoryField::TextType,
            CategoryOptions::new(&[
                ("general", "General"),
                ("technical-documentation", "Technical Documentation"),
                ("marketing-copy", "Marketing Copy"),
                ("legal-contract", "Legal Contract"),
            ]),
        ),
        (
            CategoryField::Segment,
            CategoryOptions::new(&[
                ("b2b", "B2B"),
                ("b2c", "B2C"),
                ("government", "Government"),
            ]),
        ),
    ]
});

/// Configuration profile of the form
///
/// `Strict` shows four fields that all start unselected and must be chosen
/// before submitting. `Relaxed` shows three preselected fields and only
/// requires source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Strict,
    Relaxed,
}

impl Profile {
    pub fn all() -> [Profile; 2] {
        [Profile::Strict, Profile::Relaxed]
    }

    fn table(&self) -> &'static FieldTable {
        match self {
            Self::Strict => &*STRICT_TABLE,
            Self::Relaxed => &*RELAXED_TABLE,
        }
    }

    /// Fields shown by this profile, in display order
    pub fn fields(&self) -> Vec<CategoryField> {
        self.table().iter().map(|(field, _)| *field).collect()
    }

    pub fn has_field(&self, field: CategoryField) -> bool {
        self.table().iter().any(|(f, _)| *f == field)
    }

    /// Option table of a field, `None` if the profile does not show it
    pub fn options(&self, field: CategoryField) -> Option<&'static CategoryOptions> {
        self.table()
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, options)| options)
    }

    /// Whether every field must be selected before submit
    pub fn requires_all_fields(&self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Starting selection: the sentinel in strict mode, the first option otherwise
    pub fn initial_selection(&self) -> Selection {
        let values = self
            .table()
            .iter()
            .map(|(field, options)| {
                let key = if self.requires_all_fields() {
                    EMPTY_KEY
                } else {
                    options.first_key()
                };
                (*field, key.to_string())
            })
            .collect();
        Selection { values }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strict => "Strict (all categories required)",
            Self::Relaxed => "Relaxed (categories optional)",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Relaxed => write!(f, "relaxed"),
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "relaxed" => Ok(Self::Relaxed),
            _ => Err(anyhow!("Invalid profile: {}", s)),
        }
    }
}

/// The chosen key of every field in a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    values: BTreeMap<CategoryField, String>,
}

impl Selection {
    /// Currently selected key of a field
    pub fn get(&self, field: CategoryField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub(crate) fn set(&mut self, field: CategoryField, key: &str) {
        self.values.insert(field, key.to_string());
    }

    pub fn is_unset(&self, field: CategoryField) -> bool {
        self.get(field).is_none_or(|key| key == EMPTY_KEY)
    }

    /// First field, in the profile's order, that still holds the sentinel
    pub fn first_missing(&self, profile: Profile) -> Option<CategoryField> {
        profile.fields().into_iter().find(|field| self.is_unset(*field))
    }

    /// Resolve every key to its display label
    ///
    /// Unselected fields resolve to the sentinel's empty label.
    pub fn resolve(&self, profile: Profile) -> BTreeMap<CategoryField, String> {
        self.values
            .iter()
            .map(|(field, key)| {
                let label = profile
                    .options(*field)
                    .and_then(|options| options.label_for(key))
                    .unwrap_or("");
                (*field, label.to_string())
            })
            .collect()
    }
}
