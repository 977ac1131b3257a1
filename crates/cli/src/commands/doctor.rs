use serde::Serialize;
use wardrobe_core::config::{AppConfig, LoadOptions};
use wardrobe_core::suggestions::FirstSelector;
use wardrobe_core::{Category, ClothingItem, OutfitEngine, SuggestionFilters};

use super::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
        return CommandResult { exit_code, output };
    }

    CommandResult { exit_code, output: render_human(&report) }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            match config.build_engine() {
                Ok(engine) => {
                    checks.push(DoctorCheck {
                        name: "style_guide",
                        status: CheckStatus::Pass,
                        details: format!(
                            "{} with {} base colors",
                            style_guide_source(&config),
                            engine.scorer().palette().len()
                        ),
                    });
                    checks.push(check_engine_smoke(&engine));
                }
                Err(error) => {
                    checks.push(DoctorCheck {
                        name: "style_guide",
                        status: CheckStatus::Fail,
                        details: error.to_string(),
                    });
                    checks.push(skipped("engine_smoke", "style guide did not load"));
                }
            }
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(skipped("style_guide", "configuration did not load"));
            checks.push(skipped("engine_smoke", "configuration did not load"));
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn style_guide_source(config: &AppConfig) -> String {
    match &config.suggestions.style_guide_path {
        Some(path) => format!("loaded `{}`", path.display()),
        None => "built-in style guide".to_string(),
    }
}

/// Runs the engine over a two-piece wardrobe that must yield one outfit.
fn check_engine_smoke(engine: &OutfitEngine) -> DoctorCheck {
    let sample = [
        ClothingItem::new("doctor-top", "Sample tee", Category::Top, "white"),
        ClothingItem::new("doctor-bottom", "Sample jeans", Category::Bottom, "black"),
    ];

    match engine.suggest(&sample, &SuggestionFilters::new(), &mut FirstSelector) {
        Ok(batch) if !batch.suggestions.is_empty() => DoctorCheck {
            name: "engine_smoke",
            status: CheckStatus::Pass,
            details: format!("sample wardrobe produced {} suggestion(s)", batch.suggestions.len()),
        },
        Ok(_) => DoctorCheck {
            name: "engine_smoke",
            status: CheckStatus::Fail,
            details: "sample wardrobe produced no suggestions".to_string(),
        },
        Err(error) => {
            DoctorCheck { name: "engine_smoke", status: CheckStatus::Fail, details: error.to_string() }
        }
    }
}

fn skipped(name: &'static str, reason: &str) -> DoctorCheck {
    DoctorCheck {
        name,
        status: CheckStatus::Skipped,
        details: format!("skipped because {reason}"),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
