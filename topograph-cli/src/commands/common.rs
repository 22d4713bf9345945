use std::path::Path;

use anyhow::{bail, Context};
use topograph::{Graph, ValidationConfig};

/// Load a topology snapshot from a JSON file.
pub fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read topology: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse topology: {}", path.display()))
}

/// Map a `--validation` level to its preset.
pub fn validation_config(level: &str) -> anyhow::Result<ValidationConfig> {
    Ok(match level {
        "disabled" => ValidationConfig::disabled(),
        "minimal" => ValidationConfig::minimal(),
        "production" => ValidationConfig::production(),
        "strict" => ValidationConfig::strict(),
        other => bail!(
            "unknown validation level: {other} (expected disabled, minimal, production, or strict)"
        ),
    })
}
