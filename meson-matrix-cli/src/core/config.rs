use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Option name to option value, passed verbatim to the configure command.
pub type BuildOptions = IndexMap<String, String>;

/// Configuration name to its build options, in configuration-file order.
pub type ProjectConfig = IndexMap<String, BuildOptions>;

const CONFIG_DIR_NAME: &str = "meson-matrix";

/// Per-user configuration directory for this tool, e.g. `~/.config/meson-matrix`.
/// Only `main` consults this; everything else takes an explicit root so tests
/// can point at a temporary directory.
pub fn default_config_root() -> Result<PathBuf> {
    let base =
        dirs::config_dir().context("Could not determine the user configuration directory")?;
    Ok(base.join(CONFIG_DIR_NAME))
}

/// Path of the configuration file for a project under a config root
pub fn project_config_path(root: &Path, project: &str) -> PathBuf {
    root.join(format!("{}.json", project))
}

/// Load a project's configuration set from its JSON file
pub fn load_project_config(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: ProjectConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;
    Ok(config)
}

/// Restrict a configuration set to the named entries, preserving file order.
/// An empty name list means no filtering; unknown names select nothing.
pub fn filter_config(mut config: ProjectConfig, names: &[String]) -> ProjectConfig {
    if names.is_empty() {
        return config;
    }

    config.retain(|name, _| names.contains(name));
    config
}
