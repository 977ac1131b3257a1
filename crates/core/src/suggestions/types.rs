//! Types for the Suggestion Engine

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::clothing::{ClothingId, ClothingItem, Season};

/// Optional caller preferences for a suggestion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionFilters {
    /// Free-text occasion such as `casual` or `business`
    #[serde(default, deserialize_with = "blank_as_none")]
    pub occasion: Option<String>,
    /// Season the outfit is meant for
    #[serde(default, deserialize_with = "blank_season_as_none")]
    pub season: Option<Season>,
    /// Color fragment matched (case-sensitively) against candidate colors
    #[serde(default, deserialize_with = "blank_as_none")]
    pub color_preference: Option<String>,
}

impl SuggestionFilters {
    /// Create empty filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the occasion
    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    /// Set the season
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = Some(season);
        self
    }

    /// Set the color preference
    pub fn with_color_preference(mut self, color: impl Into<String>) -> Self {
        self.color_preference = Some(color.into());
        self
    }

    /// Drop blank strings, which forms submit for "no preference".
    pub fn normalized(&self) -> Self {
        Self {
            occasion: self.occasion.clone().filter(|value| !value.trim().is_empty()),
            season: self.season,
            color_preference: self
                .color_preference
                .clone()
                .filter(|value| !value.trim().is_empty()),
        }
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.trim().is_empty()))
}

fn blank_season_as_none<'de, D>(deserializer: D) -> Result<Option<Season>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.parse::<Season>().map(Some).map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}

/// How a suggestion was composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Top and bottom, usually with shoes
    Separates,
    /// Dress with shoes
    Dress,
    /// An earlier suggestion with outerwear added
    Layered,
}

/// One proposed outfit. Items borrow from the caller's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSuggestion<'a> {
    /// Identifier unique within one engine invocation
    pub id: String,
    /// Generated label, e.g. `Casual Outfit 1`
    pub name: String,
    pub kind: SuggestionKind,
    /// Two to four items in wearing order
    pub items: Vec<&'a ClothingItem>,
    pub occasion: String,
    pub season: Season,
    /// Human-readable justification
    pub reason: String,
}

impl OutfitSuggestion<'_> {
    pub fn item_ids(&self) -> Vec<ClothingId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// Payload accepted by the outfit store when a user keeps this suggestion.
    pub fn to_outfit_draft(&self) -> OutfitDraft {
        OutfitDraft {
            name: self.name.clone(),
            description: self.reason.clone(),
            occasion: self.occasion.clone(),
            season: self.season,
            clothing_ids: self.item_ids(),
        }
    }
}

/// Save request for the external outfit store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitDraft {
    pub name: String,
    pub description: String,
    pub occasion: String,
    pub season: Season,
    pub clothing_ids: Vec<ClothingId>,
}

/// Engine output for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionBatch<'a> {
    pub suggestions: Vec<OutfitSuggestion<'a>>,
    /// Inventory size before season filtering
    pub total_inventory_size: usize,
}

/// Bounds on how many candidates each composition step may produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionLimits {
    /// Tops considered for separates (default: 3)
    pub max_tops: usize,
    /// Best-ranked bottoms kept per top (default: 2)
    pub bottoms_per_top: usize,
    /// Dresses considered (default: 2)
    pub max_dresses: usize,
    /// Suggestions that receive an outerwear variant (default: 2)
    pub max_enhancements: usize,
    /// Final output cap (default: 6)
    pub max_suggestions: usize,
}

impl Default for CompositionLimits {
    fn default() -> Self {
        Self {
            max_tops: 3,
            bottoms_per_top: 2,
            max_dresses: 2,
            max_enhancements: 2,
            max_suggestions: super::DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl CompositionLimits {
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }
}
