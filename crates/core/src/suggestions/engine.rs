//! Suggestion Engine implementation

use tracing::debug;

use super::palette::StyleGuide;
use super::reasoning::ReasonWriter;
use super::scoring::CompatibilityScorer;
use super::selector::OuterwearSelector;
use super::types::*;
use super::wardrobe::{filter_by_season, CategoryBuckets};
use super::{SuggestionResult, DEFAULT_OCCASION};
use crate::domain::clothing::{Category, ClothingItem, Season};
use crate::errors::DomainError;

/// Filters after defaulting, shared by every suggestion in one run
struct RunContext<'f> {
    filters: &'f SuggestionFilters,
    occasion: String,
    season: Season,
}

impl<'f> RunContext<'f> {
    fn new(filters: &'f SuggestionFilters) -> Self {
        Self {
            filters,
            occasion: filters.occasion.clone().unwrap_or_else(|| DEFAULT_OCCASION.to_owned()),
            season: filters.season.unwrap_or(Season::AllSeason),
        }
    }

    fn color_preference(&self) -> Option<&str> {
        self.filters.color_preference.as_deref()
    }

    fn requested_occasion(&self) -> Option<&str> {
        self.filters.occasion.as_deref()
    }
}

/// The main suggestion engine
#[derive(Debug, Clone, Default)]
pub struct OutfitEngine {
    /// Pairwise scorer
    scorer: CompatibilityScorer,
    /// Justification text
    reasons: ReasonWriter,
    limits: CompositionLimits,
}

impl OutfitEngine {
    /// Create an engine over `guide` with default limits
    pub fn new(guide: StyleGuide) -> Self {
        Self::with_limits(guide, CompositionLimits::default())
    }

    /// Create with custom limits
    pub fn with_limits(guide: StyleGuide, limits: CompositionLimits) -> Self {
        let StyleGuide { colors, occasions } = guide;
        Self {
            scorer: CompatibilityScorer::new(colors.clone()),
            reasons: ReasonWriter::new(colors, occasions),
            limits,
        }
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    pub fn limits(&self) -> CompositionLimits {
        self.limits
    }

    /// Suggest outfits from one user's inventory.
    ///
    /// Fails only when `inventory` is empty. Output order is separates, then
    /// dresses, then layered variants, truncated to `max_suggestions`.
    pub fn suggest<'a, S>(
        &self,
        inventory: &'a [ClothingItem],
        filters: &SuggestionFilters,
        selector: &mut S,
    ) -> SuggestionResult<SuggestionBatch<'a>>
    where
        S: OuterwearSelector + ?Sized,
    {
        if inventory.is_empty() {
            return Err(DomainError::EmptyInventory);
        }

        let filters = filters.normalized();
        let context = RunContext::new(&filters);

        let seasonal = filter_by_season(inventory, filters.season);
        let buckets = CategoryBuckets::partition(&seasonal);

        let mut suggestions = Vec::new();
        self.compose_separates(&buckets, &context, &mut suggestions);
        self.compose_dresses(&buckets, &context, &mut suggestions);
        let base_count = suggestions.len();

        let layered = self.layer_outerwear(&suggestions, &buckets, selector);
        let layered_count = layered.len();
        suggestions.extend(layered);
        suggestions.truncate(self.limits.max_suggestions);

        debug!(
            event_name = "core.suggestions.generated",
            inventory_size = inventory.len(),
            seasonal_size = seasonal.len(),
            base_count,
            layered_count,
            returned = suggestions.len(),
            "outfit suggestions generated"
        );

        Ok(SuggestionBatch { suggestions, total_inventory_size: inventory.len() })
    }

    /// Top + bottom (+ shoes). Shoes are ranked against the top.
    fn compose_separates<'a>(
        &self,
        buckets: &CategoryBuckets<'a>,
        context: &RunContext<'_>,
        out: &mut Vec<OutfitSuggestion<'a>>,
    ) {
        let tops = buckets.get(Category::Top);
        let bottoms = buckets.get(Category::Bottom);
        if tops.is_empty() || bottoms.is_empty() {
            return;
        }
        let shoes = buckets.get(Category::Shoes);

        for &top in tops.iter().take(self.limits.max_tops) {
            let ranked_bottoms = self.scorer.rank(top, bottoms, context.color_preference());
            let best_shoe =
                self.scorer.rank(top, shoes, context.color_preference()).first().map(|s| s.item);

            for bottom in ranked_bottoms.iter().take(self.limits.bottoms_per_top) {
                let mut items = vec![top, bottom.item];
                items.extend(best_shoe);

                let position = out.len() + 1;
                out.push(OutfitSuggestion {
                    id: format!("outfit-{position}"),
                    name: format!("Casual Outfit {position}"),
                    kind: SuggestionKind::Separates,
                    items,
                    occasion: context.occasion.clone(),
                    season: context.season,
                    reason: self.reasons.reason(
                        top,
                        Some(bottom.item),
                        context.requested_occasion(),
                    ),
                });
            }
        }
    }

    /// Dress + best-ranked shoes. Dresses without any shoes are skipped.
    fn compose_dresses<'a>(
        &self,
        buckets: &CategoryBuckets<'a>,
        context: &RunContext<'_>,
        out: &mut Vec<OutfitSuggestion<'a>>,
    ) {
        let shoes = buckets.get(Category::Shoes);

        for &dress in buckets.get(Category::Dress).iter().take(self.limits.max_dresses) {
            let ranked = self.scorer.rank(dress, shoes, context.color_preference());
            let Some(shoe) = ranked.first() else {
                continue;
            };

            let position = out.len() + 1;
            out.push(OutfitSuggestion {
                id: format!("outfit-{position}"),
                name: format!("Dress Outfit {position}"),
                kind: SuggestionKind::Dress,
                items: vec![dress, shoe.item],
                occasion: context.occasion.clone(),
                season: context.season,
                reason: self.reasons.reason(dress, Some(shoe.item), context.requested_occasion()),
            });
        }
    }

    /// New suggestions that add one outerwear piece to the earliest base suggestions.
    fn layer_outerwear<'a, S>(
        &self,
        base: &[OutfitSuggestion<'a>],
        buckets: &CategoryBuckets<'a>,
        selector: &mut S,
    ) -> Vec<OutfitSuggestion<'a>>
    where
        S: OuterwearSelector + ?Sized,
    {
        let outerwear = buckets.get(Category::Outerwear);
        if outerwear.is_empty() {
            return Vec::new();
        }

        base.iter()
            .take(self.limits.max_enhancements)
            .map(|suggestion| {
                let layer = outerwear[selector.select(outerwear.len()) % outerwear.len()];
                let mut items = suggestion.items.clone();
                items.push(layer);

                OutfitSuggestion {
                    id: format!("{}-layered", suggestion.id),
                    name: suggestion.name.replacen("Outfit", "Complete Outfit", 1),
                    kind: SuggestionKind::Layered,
                    items,
                    occasion: suggestion.occasion.clone(),
                    season: suggestion.season,
                    reason: self.reasons.layered(&suggestion.reason, layer),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::suggestions::{FirstSelector, RandomSelector, DEFAULT_MAX_SUGGESTIONS};

    fn item(id: &str, category: Category, color: &str) -> ClothingItem {
        ClothingItem::new(id, id.replace('-', " "), category, color)
    }

    fn basics() -> Vec<ClothingItem> {
        vec![
            item("white-tee", Category::Top, "white"),
            item("black-jeans", Category::Bottom, "black"),
            item("white-sneakers", Category::Shoes, "white"),
        ]
    }

    fn ids(suggestion: &OutfitSuggestion<'_>) -> Vec<String> {
        suggestion.items.iter().map(|item| item.id.0.clone()).collect()
    }

    #[test]
    fn empty_inventory_is_rejected() {
        let engine = OutfitEngine::default();
        let result = engine.suggest(&[], &SuggestionFilters::default(), &mut FirstSelector);

        assert_eq!(result, Err(DomainError::EmptyInventory));
    }

    #[test]
    fn basic_trio_yields_one_defaulted_suggestion() {
        let engine = OutfitEngine::default();
        let inventory = basics();

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert_eq!(batch.total_inventory_size, 3);
        assert_eq!(batch.suggestions.len(), 1);

        let suggestion = &batch.suggestions[0];
        assert_eq!(ids(suggestion), vec!["white-tee", "black-jeans", "white-sneakers"]);
        assert_eq!(suggestion.name, "Casual Outfit 1");
        assert_eq!(suggestion.kind, SuggestionKind::Separates);
        assert_eq!(suggestion.occasion, "casual");
        assert_eq!(suggestion.season, Season::AllSeason);
        assert!(suggestion.reason.contains("white"));
        assert!(suggestion.reason.contains("black"));
    }

    #[test]
    fn accessories_only_inventory_yields_nothing() {
        let engine = OutfitEngine::default();
        let inventory = vec![
            item("cap", Category::Hat, "navy"),
            item("tote", Category::Bag, "beige"),
            item("beanie", Category::Hat, "gray"),
        ];

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert!(batch.suggestions.is_empty());
        assert_eq!(batch.total_inventory_size, 3);
    }

    #[test]
    fn separates_without_shoes_still_pair_top_and_bottom() {
        let engine = OutfitEngine::default();
        let inventory = vec![
            item("white-tee", Category::Top, "white"),
            item("black-jeans", Category::Bottom, "black"),
        ];

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert_eq!(batch.suggestions.len(), 1);
        assert_eq!(ids(&batch.suggestions[0]), vec!["white-tee", "black-jeans"]);
    }

    #[test]
    fn dresses_need_shoes() {
        let engine = OutfitEngine::default();
        let inventory = vec![item("slip-dress", Category::Dress, "black")];

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert!(batch.suggestions.is_empty());
    }

    #[test]
    fn separates_take_three_tops_and_two_best_bottoms_each() {
        let engine = OutfitEngine::new(StyleGuide::default());
        let inventory = vec![
            item("tee-1", Category::Top, "white"),
            item("tee-2", Category::Top, "gray"),
            item("tee-3", Category::Top, "navy"),
            item("tee-4", Category::Top, "red"),
            item("mauve-skirt", Category::Bottom, "mauve"),
            item("black-jeans", Category::Bottom, "black"),
            item("khaki-chinos", Category::Bottom, "khaki"),
        ];

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert_eq!(batch.suggestions.len(), 6);
        let pairs: Vec<Vec<String>> = batch.suggestions.iter().map(ids).collect();
        assert_eq!(pairs[0], vec!["tee-1", "black-jeans"]);
        assert_eq!(pairs[1], vec!["tee-1", "khaki-chinos"]);
        assert_eq!(pairs[2], vec!["tee-2", "black-jeans"]);
        assert_eq!(pairs[3], vec!["tee-2", "mauve-skirt"]);
        assert_eq!(pairs[4], vec!["tee-3", "khaki-chinos"]);
        assert_eq!(pairs[5], vec!["tee-3", "mauve-skirt"]);
        assert!(batch.suggestions.iter().all(|s| !ids(s).contains(&"tee-4".to_owned())));
    }

    #[test]
    fn shoes_are_ranked_against_the_top() {
        let engine = OutfitEngine::default();
        let inventory = vec![
            item("white-shirt", Category::Top, "white"),
            item("navy-trousers", Category::Bottom, "navy"),
            item("beige-loafers", Category::Shoes, "beige"),
            item("black-boots", Category::Shoes, "black"),
        ];

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        // navy -> beige would favor the loafers; white -> black picks the boots.
        assert_eq!(ids(&batch.suggestions[0])[2], "black-boots");
    }

    #[test]
    fn labels_share_one_counter_across_strategies() {
        let engine = OutfitEngine::default();
        let mut inventory = basics();
        inventory.push(item("red-dress", Category::Dress, "red"));

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        let names: Vec<&str> = batch.suggestions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Casual Outfit 1", "Dress Outfit 2"]);
        assert_eq!(ids(&batch.suggestions[1]), vec!["red-dress", "white-sneakers"]);
    }

    #[test]
    fn outerwear_adds_min_two_layered_variants() {
        let engine = OutfitEngine::default();
        let mut inventory = basics();
        inventory.push(item("red-dress", Category::Dress, "red"));
        inventory.push(item("silk-dress", Category::Dress, "pink"));
        let without = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest")
            .suggestions
            .len();

        inventory.push(item("denim-jacket", Category::Outerwear, "denim"));
        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert_eq!(without, 3);
        assert_eq!(batch.suggestions.len(), without + 2);

        let layered = &batch.suggestions[3];
        assert_eq!(layered.kind, SuggestionKind::Layered);
        assert_eq!(layered.name, "Casual Complete Outfit 1");
        assert_eq!(layered.id, "outfit-1-layered");
        assert_eq!(
            ids(layered),
            vec!["white-tee", "black-jeans", "white-sneakers", "denim-jacket"]
        );
        assert!(layered.reason.starts_with(&batch.suggestions[0].reason));
        assert!(layered.reason.contains("denim jacket"));
        assert_eq!(batch.suggestions[4].name, "Dress Complete Outfit 2");
    }

    #[test]
    fn single_base_gets_single_layered_variant() {
        let engine = OutfitEngine::default();
        let mut inventory = basics();
        inventory.push(item("trench", Category::Outerwear, "beige"));

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert_eq!(batch.suggestions.len(), 2);
        assert_eq!(batch.suggestions[1].items.len(), 4);
    }

    #[test]
    fn outerwear_choice_comes_from_the_selector() {
        let engine = OutfitEngine::default();
        let mut inventory = basics();
        inventory.push(item("trench", Category::Outerwear, "beige"));
        inventory.push(item("parka", Category::Outerwear, "olive"));

        let mut last = |len: usize| len - 1;
        let batch =
            engine.suggest(&inventory, &SuggestionFilters::default(), &mut last).expect("suggest");
        assert_eq!(ids(&batch.suggestions[1])[3], "parka");

        let mut wrapping = |len: usize| len + 2;
        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut wrapping)
            .expect("suggest");
        assert_eq!(ids(&batch.suggestions[1])[3], "trench");
    }

    #[test]
    fn seeded_random_selection_is_reproducible() {
        let engine = OutfitEngine::default();
        let mut inventory = basics();
        inventory.push(item("black-jeans-2", Category::Bottom, "black"));
        for (id, color) in [("trench", "beige"), ("parka", "olive"), ("blazer", "navy")] {
            inventory.push(item(id, Category::Outerwear, color));
        }

        let first = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut RandomSelector::seeded(7))
            .expect("suggest");
        let second = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut RandomSelector::seeded(7))
            .expect("suggest");

        assert_eq!(first, second);
    }

    #[test]
    fn output_is_capped_and_layered_variants_are_cut_first() {
        let engine = OutfitEngine::default();
        let mut inventory = vec![
            item("tee-1", Category::Top, "white"),
            item("tee-2", Category::Top, "gray"),
            item("tee-3", Category::Top, "navy"),
            item("jeans", Category::Bottom, "black"),
            item("chinos", Category::Bottom, "khaki"),
            item("sneakers", Category::Shoes, "white"),
            item("dress", Category::Dress, "red"),
            item("coat", Category::Outerwear, "camel"),
        ];
        inventory.push(item("skirt", Category::Bottom, "gray"));

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert_eq!(batch.suggestions.len(), DEFAULT_MAX_SUGGESTIONS);
        assert!(batch.suggestions.iter().all(|s| s.kind == SuggestionKind::Separates));
    }

    #[test]
    fn custom_cap_is_respected() {
        let limits = CompositionLimits::default().with_max_suggestions(1);
        let engine = OutfitEngine::with_limits(StyleGuide::default(), limits);
        let mut inventory = basics();
        inventory.push(item("coat", Category::Outerwear, "camel"));

        let batch = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");

        assert_eq!(batch.suggestions.len(), 1);
        assert_eq!(engine.limits().max_suggestions, 1);
    }

    #[test]
    fn season_filter_removes_off_season_items_and_is_echoed() {
        let engine = OutfitEngine::default();
        let inventory = vec![
            item("wool-sweater", Category::Top, "gray").with_season(Season::Winter),
            item("linen-shirt", Category::Top, "white").with_season(Season::Summer),
            item("black-jeans", Category::Bottom, "black"),
            item("parka", Category::Outerwear, "olive").with_season(Season::Winter),
        ];
        let filters = SuggestionFilters::new().with_season(Season::Summer).with_occasion("formal");

        let batch = engine.suggest(&inventory, &filters, &mut FirstSelector).expect("suggest");

        assert_eq!(batch.suggestions.len(), 1);
        assert_eq!(ids(&batch.suggestions[0]), vec!["linen-shirt", "black-jeans"]);
        assert_eq!(batch.suggestions[0].season, Season::Summer);
        assert_eq!(batch.suggestions[0].occasion, "formal");
        assert!(batch.suggestions[0].reason.ends_with("Well suited for formal occasions."));
        assert_eq!(batch.total_inventory_size, 4);
    }

    #[test]
    fn color_preference_changes_the_bottom_pick() {
        let engine = OutfitEngine::new(StyleGuide::default());
        let inventory = vec![
            item("mauve-top", Category::Top, "mauve"),
            item("olive-pants", Category::Bottom, "olive"),
            item("rust-pants", Category::Bottom, "burnt rust"),
            item("teal-pants", Category::Bottom, "teal"),
        ];

        let plain = engine
            .suggest(&inventory, &SuggestionFilters::default(), &mut FirstSelector)
            .expect("suggest");
        assert_eq!(ids(&plain.suggestions[0])[1], "olive-pants");
        assert_eq!(ids(&plain.suggestions[1])[1], "rust-pants");

        let filters = SuggestionFilters::new().with_color_preference("teal");
        let preferred = engine.suggest(&inventory, &filters, &mut FirstSelector).expect("suggest");
        assert_eq!(ids(&preferred.suggestions[0])[1], "teal-pants");
    }

    #[test]
    fn items_come_from_the_inventory_and_stay_in_bounds() {
        let engine = OutfitEngine::default();
        let inventory = vec![
            item("tee-1", Category::Top, "white"),
            item("tee-2", Category::Top, "black"),
            item("jeans", Category::Bottom, "denim"),
            item("boots", Category::Shoes, "brown"),
            item("dress", Category::Dress, "navy"),
            item("coat", Category::Outerwear, "camel"),
            item("jacket", Category::Outerwear, "black"),
            item("scarf", Category::Accessory, "red"),
        ];
        let known: HashSet<&str> = inventory.iter().map(|item| item.id.as_str()).collect();

        for seed in 0..8 {
            let batch = engine
                .suggest(&inventory, &SuggestionFilters::default(), &mut RandomSelector::seeded(seed))
                .expect("suggest");

            assert!(batch.suggestions.len() <= DEFAULT_MAX_SUGGESTIONS);
            for suggestion in &batch.suggestions {
                assert!((2..=4).contains(&suggestion.items.len()));
                assert!(suggestion.items.iter().all(|item| known.contains(item.id.as_str())));
            }
            let unique: HashSet<&str> = batch.suggestions.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(unique.len(), batch.suggestions.len());
        }
    }

    #[test]
    fn blank_filters_behave_like_no_filters() {
        let engine = OutfitEngine::default();
        let inventory = basics();
        let blank = SuggestionFilters {
            occasion: Some(String::new()),
            season: None,
            color_preference: Some(" ".to_owned()),
        };

        let batch = engine.suggest(&inventory, &blank, &mut FirstSelector).expect("suggest");

        assert_eq!(batch.suggestions[0].occasion, "casual");
        assert!(!batch.suggestions[0].reason.contains("occasions"));
    }
}
