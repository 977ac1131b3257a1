pub mod config;
pub mod domain;
pub mod errors;
pub mod suggestions;

pub use domain::clothing::{Category, ClothingId, ClothingItem, Season};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use suggestions::{
    CompositionLimits, OutfitDraft, OutfitEngine, OutfitSuggestion, OuterwearSelector,
    RandomSelector, StyleGuide, SuggestionBatch, SuggestionFilters,
};
