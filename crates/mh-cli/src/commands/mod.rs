pub mod config;
pub mod simulate;

use std::path::Path;

use mh_simulation::GameConfig;

/// Load a config file, or the defaults when no path is given.
fn load_config(path: Option<&Path>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}
