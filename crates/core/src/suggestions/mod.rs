//! Outfit Suggestion Engine
//!
//! Turns one user's clothing inventory into a short list of coherent outfits.
//! Items are season-filtered, partitioned by category, paired by color and tag
//! compatibility, optionally layered with outerwear, and capped.

mod engine;
mod palette;
mod reasoning;
mod scoring;
mod selector;
mod types;
mod wardrobe;

pub use engine::OutfitEngine;
pub use palette::{ColorPalette, OccasionLabels, StyleGuide};
pub use reasoning::ReasonWriter;
pub use scoring::{CompatibilityScorer, ScoredCandidate};
pub use selector::{FirstSelector, OuterwearSelector, RandomSelector};
pub use types::*;
pub use wardrobe::{filter_by_season, CategoryBuckets};

use crate::errors::DomainError;

/// Result type for suggestion operations
pub type SuggestionResult<T> = Result<T, DomainError>;

/// Score awarded when the candidate color is listed as complementary to the base color.
pub const COMPLEMENTARY_COLOR_SCORE: u32 = 3;

/// Score awarded when base and candidate share the same color and no complement matched.
pub const MONOCHROME_SCORE: u32 = 1;

/// Score awarded when the caller's color preference appears in the candidate color.
pub const COLOR_PREFERENCE_SCORE: u32 = 2;

/// Maximum suggestions returned by one invocation.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;

/// Occasion echoed on suggestions when the caller leaves it unset.
pub const DEFAULT_OCCASION: &str = "casual";
