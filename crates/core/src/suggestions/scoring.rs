//! Pairwise compatibility scoring

use std::collections::HashSet;

use serde::Serialize;

use super::palette::ColorPalette;
use super::{COLOR_PREFERENCE_SCORE, COMPLEMENTARY_COLOR_SCORE, MONOCHROME_SCORE};
use crate::domain::clothing::ClothingItem;

/// A pool item with its score against some base item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate<'a> {
    pub item: &'a ClothingItem,
    pub score: u32,
}

/// Scores how well a candidate goes with a base item
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    palette: ColorPalette,
}

impl CompatibilityScorer {
    /// Create a scorer over the given color table
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Additive compatibility score of `candidate` against `base`
    pub fn score(
        &self,
        base: &ClothingItem,
        candidate: &ClothingItem,
        color_preference: Option<&str>,
    ) -> u32 {
        let mut score = 0;

        if self.palette.is_complementary(&base.color, &candidate.color) {
            score += COMPLEMENTARY_COLOR_SCORE;
        } else if base.color == candidate.color {
            score += MONOCHROME_SCORE;
        }

        if let Some(preference) = color_preference.filter(|value| !value.is_empty()) {
            if candidate.color.contains(preference) {
                score += COLOR_PREFERENCE_SCORE;
            }
        }

        score + shared_tag_count(base, candidate)
    }

    /// Pool sorted by descending score. Ties keep pool order.
    pub fn rank<'a>(
        &self,
        base: &ClothingItem,
        pool: &[&'a ClothingItem],
        color_preference: Option<&str>,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut ranked: Vec<ScoredCandidate<'a>> = pool
            .iter()
            .map(|&item| ScoredCandidate { item, score: self.score(base, item, color_preference) })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

/// Number of base tag tokens that also appear among the candidate's tags.
/// Duplicate base tokens each count.
fn shared_tag_count(base: &ClothingItem, candidate: &ClothingItem) -> u32 {
    let candidate_tags: HashSet<String> = candidate.tag_tokens().into_iter().collect();
    if candidate_tags.is_empty() {
        return 0;
    }

    base.tag_tokens().iter().filter(|tag| candidate_tags.contains(*tag)).count() as u32
}
