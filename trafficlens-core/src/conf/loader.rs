use crate::conf::ConfigError;
use crate::conf::types::ReportsConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE: &str = "trafficlens.hcl";

/// Loads a config file, or `trafficlens.hcl` inside a directory.
pub fn load_config(path: &Path) -> Result<ReportsConfig, ConfigError> {
    let file = resolve_path(path);

    let text = fs::read_to_string(&file).map_err(|e| ConfigError::read_file(file.clone(), e))?;
    let cfg = parse_config(&text).map_err(|e| ConfigError::parse(file.clone(), e))?;

    debug!(path = %file.display(), plugins = cfg.plugins.len(), "loaded config");
    Ok(cfg)
}

pub fn parse_config(text: &str) -> Result<ReportsConfig, hcl::Error> {
    hcl::from_str(text)
}

fn resolve_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path.to_path_buf()
    }
}
