//! Scenario file loading

use crate::error::CliError;
use anyhow::{Context, Result};
use faultline_pipeline::Scenario;
use std::fs;
use std::path::Path;

/// Load a pipeline scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    if !path.exists() {
        return Err(CliError::ScenarioNotFound(path.display().to_string()).into());
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    let scenario: Scenario =
        toml::from_str(&text).map_err(|e| CliError::InvalidScenario(e.to_string()))?;

    log::debug!("Loaded scenario from {}: {:?}", path.display(), scenario);
    Ok(scenario)
}
