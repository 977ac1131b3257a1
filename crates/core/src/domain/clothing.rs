use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClothingId(pub String);

impl ClothingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClothingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClothingId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Garment category. The same closed set drives season filtering,
/// partitioning and outfit composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Shoes,
    Hat,
    Accessory,
    Outerwear,
    Underwear,
    Socks,
    Bag,
}

impl Category {
    pub const COUNT: usize = 10;

    pub const ALL: [Category; Category::COUNT] = [
        Category::Top,
        Category::Bottom,
        Category::Dress,
        Category::Shoes,
        Category::Hat,
        Category::Accessory,
        Category::Outerwear,
        Category::Underwear,
        Category::Socks,
        Category::Bag,
    ];

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Bottom => "BOTTOM",
            Category::Dress => "DRESS",
            Category::Shoes => "SHOES",
            Category::Hat => "HAT",
            Category::Accessory => "ACCESSORY",
            Category::Outerwear => "OUTERWEAR",
            Category::Underwear => "UNDERWEAR",
            Category::Socks => "SOCKS",
            Category::Bag => "BAG",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Bottom => "Bottoms",
            Category::Dress => "Dress",
            Category::Shoes => "Shoes",
            Category::Hat => "Hat",
            Category::Accessory => "Accessory",
            Category::Outerwear => "Outerwear",
            Category::Underwear => "Underwear",
            Category::Socks => "Socks",
            Category::Bag => "Bag",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidCategory(value.trim().to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
    AllSeason,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Autumn => "AUTUMN",
            Season::Winter => "WINTER",
            Season::AllSeason => "ALL_SEASON",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::AllSeason => "All seasons",
        }
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SPRING" => Ok(Season::Spring),
            "SUMMER" => Ok(Season::Summer),
            "AUTUMN" | "FALL" => Ok(Season::Autumn),
            "WINTER" => Ok(Season::Winter),
            "ALL_SEASON" | "ALL" => Ok(Season::AllSeason),
            _ => Err(DomainError::InvalidSeason(value.trim().to_owned())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored garment belonging to one user. Read-only to the suggestion engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: ClothingId,
    pub name: String,
    pub category: Category,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    /// Comma-separated free-text labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ClothingItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: ClothingId(id.into()),
            name: name.into(),
            category,
            color: color.into(),
            season: None,
            tags: None,
            brand: None,
            size: None,
            image_url: None,
        }
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Whether this item can be worn in `season`. Items without a season
    /// and `ALL_SEASON` items are wearable year-round.
    pub fn wearable_in(&self, season: Season) -> bool {
        match self.season {
            None | Some(Season::AllSeason) => true,
            Some(own) => own == season,
        }
    }

    /// Tag tokens split on commas, trimmed and lower-cased. Empty tokens are dropped;
    /// duplicates are kept.
    pub fn tag_tokens(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect()
    }
}
