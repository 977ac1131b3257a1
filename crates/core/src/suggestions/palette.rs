//! Color-compatibility and occasion lookup tables
//!
//! Both tables are plain data handed to the engine at construction, so a
//! deployment (or a test) can swap in its own style guide.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

const DEFAULT_COLOR_MATCHES: &[(&str, &[&str])] = &[
    ("black", &["white", "gray", "red", "beige", "pink", "camel"]),
    ("white", &["black", "navy", "blue", "gray", "khaki", "denim", "red"]),
    ("gray", &["black", "white", "navy", "pink", "burgundy"]),
    ("navy", &["white", "beige", "khaki", "gray", "camel"]),
    ("blue", &["white", "beige", "khaki", "brown"]),
    ("beige", &["white", "navy", "brown", "olive"]),
    ("khaki", &["white", "navy", "black"]),
    ("brown", &["beige", "white", "cream", "olive"]),
    ("red", &["black", "white", "navy", "denim"]),
    ("pink", &["gray", "white", "navy", "denim"]),
    ("green", &["white", "beige", "brown", "khaki"]),
    ("olive", &["white", "beige", "black"]),
    ("denim", &["white", "black", "gray", "red"]),
];

const DEFAULT_OCCASION_LABELS: &[(&str, &str)] = &[
    ("casual", "casual"),
    ("formal", "formal"),
    ("business", "business"),
    ("sport", "sporty"),
];

/// Maps a base color to the colors that complement it. Lookups are
/// case-sensitive and directional: `black -> khaki` need not imply `khaki -> black`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    matches: HashMap<String, Vec<String>>,
}

impl ColorPalette {
    pub fn new(matches: HashMap<String, Vec<String>>) -> Self {
        Self { matches }
    }

    pub fn complements(&self, base: &str) -> &[String] {
        self.matches.get(base).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `candidate` is listed as a complement of `base`.
    pub fn is_complementary(&self, base: &str, candidate: &str) -> bool {
        self.complements(base).iter().any(|color| color == candidate)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        let matches = DEFAULT_COLOR_MATCHES
            .iter()
            .map(|(base, complements)| {
                (
                    (*base).to_owned(),
                    complements.iter().map(|color| (*color).to_owned()).collect(),
                )
            })
            .collect();
        Self { matches }
    }
}

/// Display labels for well-known occasions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccasionLabels {
    labels: HashMap<String, String>,
}

impl OccasionLabels {
    pub fn new(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }

    /// Display label for `occasion`, or the raw value when it is not listed.
    pub fn label<'a>(&'a self, occasion: &'a str) -> &'a str {
        self.labels.get(occasion).map(String::as_str).unwrap_or(occasion)
    }
}

impl Default for OccasionLabels {
    fn default() -> Self {
        let labels = DEFAULT_OCCASION_LABELS
            .iter()
            .map(|(occasion, label)| ((*occasion).to_owned(), (*label).to_owned()))
            .collect();
        Self { labels }
    }
}

/// Lookup tables consumed by the scorer and the reason writer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleGuide {
    #[serde(default)]
    pub colors: ColorPalette,
    #[serde(default)]
    pub occasions: OccasionLabels,
}

impl StyleGuide {
    pub fn new(colors: ColorPalette, occasions: OccasionLabels) -> Self {
        Self { colors, occasions }
    }

    /// Parse a TOML style guide. Missing sections fall back to the curated defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
