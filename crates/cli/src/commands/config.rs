use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use toml::Value;
use wardrobe_core::config::{AppConfig, LoadOptions};

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = detect_config_path();
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    lines.push(render_line(
        "server.bind_address",
        &config.server.bind_address,
        source("server.bind_address", &["WARDROBE_SERVER_BIND_ADDRESS"]),
    ));
    lines.push(render_line(
        "server.port",
        &config.server.port.to_string(),
        source("server.port", &["WARDROBE_SERVER_PORT"]),
    ));
    lines.push(render_line(
        "server.graceful_shutdown_secs",
        &config.server.graceful_shutdown_secs.to_string(),
        source("server.graceful_shutdown_secs", &["WARDROBE_SERVER_GRACEFUL_SHUTDOWN_SECS"]),
    ));

    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source("logging.level", &["WARDROBE_LOGGING_LEVEL", "WARDROBE_LOG_LEVEL"]),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        source("logging.format", &["WARDROBE_LOGGING_FORMAT", "WARDROBE_LOG_FORMAT"]),
    ));

    lines.push(render_line(
        "suggestions.max_suggestions",
        &config.suggestions.max_suggestions.to_string(),
        source("suggestions.max_suggestions", &["WARDROBE_SUGGESTIONS_MAX"]),
    ));
    let seed = config
        .suggestions
        .outerwear_seed
        .map(|seed| seed.to_string())
        .unwrap_or_else(|| "<unset>".to_string());
    lines.push(render_line(
        "suggestions.outerwear_seed",
        &seed,
        source("suggestions.outerwear_seed", &["WARDROBE_SUGGESTIONS_OUTERWEAR_SEED"]),
    ));
    let style_guide = config
        .suggestions
        .style_guide_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<built-in>".to_string());
    lines.push(render_line(
        "suggestions.style_guide_path",
        &style_guide,
        source("suggestions.style_guide_path", &["WARDROBE_SUGGESTIONS_STYLE_GUIDE_PATH"]),
    ));

    lines.join("\n")
}

fn detect_config_path() -> Option<PathBuf> {
    let root = PathBuf::from("wardrobe.toml");
    if root.exists() {
        return Some(root);
    }

    let nested = PathBuf::from("config/wardrobe.toml");
    if nested.exists() {
        return Some(nested);
    }

    None
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if let Some(env_key) = env_keys.iter().find(|key| env::var_os(key).is_some()) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
