use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use uuid::Uuid;
use wardrobe_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use wardrobe_core::{
    ApplicationError, ClothingItem, InterfaceError, RandomSelector, Season, SuggestionBatch,
    SuggestionFilters,
};

use super::{CommandResult, EXIT_CONFIG, EXIT_EMPTY_INVENTORY, EXIT_INVALID_INPUT};

const COMMAND: &str = "suggest";

#[derive(Debug, Clone, Default)]
pub struct SuggestArgs {
    pub inventory: PathBuf,
    pub occasion: Option<String>,
    pub season: Option<String>,
    pub color_preference: Option<String>,
    pub seed: Option<u64>,
    pub json: bool,
}

/// Either a bare array of items or an export wrapping them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InventoryFile {
    Items(Vec<ClothingItem>),
    Wrapped { inventory: Vec<ClothingItem> },
}

pub fn run(args: SuggestArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions {
        overrides: ConfigOverrides { outerwear_seed: args.seed, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    }) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "config_validation",
                format!("config validation failed: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let engine = match config.build_engine() {
        Ok(engine) => engine,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "style_guide",
                format!("style guide could not be loaded: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let inventory = match read_inventory(&args.inventory) {
        Ok(inventory) => inventory,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "invalid_input",
                format!("{error:#}"),
                EXIT_INVALID_INPUT,
            );
        }
    };

    let filters = match build_filters(&args) {
        Ok(filters) => filters,
        Err(error) => {
            return CommandResult::failure(
                COMMAND,
                "invalid_input",
                error.to_string(),
                EXIT_INVALID_INPUT,
            );
        }
    };

    let mut selector = RandomSelector::from_optional_seed(config.suggestions.outerwear_seed);
    match engine.suggest(&inventory, &filters, &mut selector) {
        Ok(batch) if args.json => render_json(&batch),
        Ok(batch) => CommandResult { exit_code: 0, output: render_human(&batch, &filters) },
        Err(error) => {
            let interface = ApplicationError::from(error).into_interface(Uuid::new_v4().to_string());
            match &interface {
                InterfaceError::Precondition { .. } => CommandResult::interface_failure(
                    COMMAND,
                    "empty_inventory",
                    &interface,
                    EXIT_EMPTY_INVENTORY,
                ),
                _ => CommandResult::interface_failure(
                    COMMAND,
                    "invalid_input",
                    &interface,
                    EXIT_INVALID_INPUT,
                ),
            }
        }
    }
}

fn read_inventory(path: &Path) -> anyhow::Result<Vec<ClothingItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read inventory file `{}`", path.display()))?;
    let parsed: InventoryFile = serde_json::from_str(&raw)
        .with_context(|| format!("inventory file `{}` is not valid JSON", path.display()))?;

    Ok(match parsed {
        InventoryFile::Items(items) | InventoryFile::Wrapped { inventory: items } => items,
    })
}

fn build_filters(args: &SuggestArgs) -> Result<SuggestionFilters, ApplicationError> {
    let season = args
        .season
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(str::parse::<Season>)
        .transpose()?;

    Ok(SuggestionFilters {
        occasion: args.occasion.clone(),
        season,
        color_preference: args.color_preference.clone(),
    }
    .normalized())
}

fn render_json(batch: &SuggestionBatch<'_>) -> CommandResult {
    match serde_json::to_string_pretty(batch) {
        Ok(output) => CommandResult { exit_code: 0, output },
        Err(error) => CommandResult::failure(
            COMMAND,
            "serialization",
            format!("suggestions could not be serialized: {error}"),
            1,
        ),
    }
}

fn render_human(batch: &SuggestionBatch<'_>, filters: &SuggestionFilters) -> String {
    let season = filters.season.map(|season| season.label()).unwrap_or("any season");
    let mut lines = vec![format!(
        "{} suggestion(s) from {} clothing item(s) ({season})",
        batch.suggestions.len(),
        batch.total_inventory_size
    )];

    if batch.suggestions.is_empty() {
        lines.push("no complete outfits could be built; try a wider season filter".to_string());
    }

    for (position, suggestion) in batch.suggestions.iter().enumerate() {
        lines.push(format!("{}. {} [{}]", position + 1, suggestion.name, suggestion.id));
        let items: Vec<String> = suggestion
            .items
            .iter()
            .map(|item| format!("{} ({})", item.name, item.category.label()))
            .collect();
        lines.push(format!("   items: {}", items.join(", ")));
        lines.push(format!("   why: {}", suggestion.reason));
    }

    lines.join("\n")
}
