//! Season filtering and category partitioning

use crate::domain::clothing::{Category, ClothingItem, Season};

/// Items wearable in `season`. With no season, or `ALL_SEASON`, every item is kept.
pub fn filter_by_season(items: &[ClothingItem], season: Option<Season>) -> Vec<&ClothingItem> {
    match season {
        None | Some(Season::AllSeason) => items.iter().collect(),
        Some(season) => items.iter().filter(|item| item.wearable_in(season)).collect(),
    }
}

/// Items grouped by category. Every category has a bucket, possibly empty,
/// and each bucket keeps the input order.
#[derive(Debug, Clone, Default)]
pub struct CategoryBuckets<'a> {
    buckets: [Vec<&'a ClothingItem>; Category::COUNT],
}

impl<'a> CategoryBuckets<'a> {
    pub fn partition(items: &[&'a ClothingItem]) -> Self {
        let mut buckets = Self::default();
        for item in items {
            buckets.buckets[item.category.index()].push(*item);
        }
        buckets
    }

    pub fn get(&self, category: Category) -> &[&'a ClothingItem] {
        &self.buckets[category.index()]
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}
