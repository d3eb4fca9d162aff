//! Optional `lpr` config file and its merge with command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` isn't given.
pub const DEFAULT_CONFIG: &str = "lpr.toml";

/// File-level settings. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `lang` attribute of rendered pages
    pub lang: Option<String>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: Option<String>,
    /// Fail `render` when any section is skipped
    pub strict: Option<bool>,
    /// Stylesheet appended after the built-in one
    pub extra_css: Option<PathBuf>,
}

/// Read a config file, picking the parser from its extension.
///
/// Returns `Ok(None)` when the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cfg: Config = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&data)
            .with_context(|| format!("failed to parse yaml config {}", path.display()))?,
        "toml" => toml::from_str(&data)
            .with_context(|| format!("failed to parse toml config {}", path.display()))?,
        _ => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse json config {}", path.display()))?,
    };
    Ok(Some(cfg))
}

/// The config named on the command line (which must exist), else the
/// default file if present.
pub fn find_config(explicit: Option<&Path>) -> Result<Option<Config>> {
    match explicit {
        Some(path) => load_config(path)?
            .map(Some)
            .with_context(|| format!("config file {} not found", path.display())),
        None => load_config(Path::new(DEFAULT_CONFIG)),
    }
}

/// Flags of `lpr render` that can also come from the config file.
#[derive(Debug, Default, Clone)]
pub struct RenderOverrides {
    pub lang: Option<String>,
    /// `Some` only when `--strict` or `--no-strict` was given
    pub strict: Option<bool>,
    pub extra_css: Option<PathBuf>,
}

/// Effective render settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub lang: String,
    pub strict: bool,
    pub extra_css: Option<PathBuf>,
}

/// Merge CLI flags over the config file. CLI wins.
pub fn resolve_render(cli: &RenderOverrides, config: Option<&Config>) -> RenderSettings {
    let from_file = config.cloned().unwrap_or_default();

    RenderSettings {
        lang: cli
            .lang
            .clone()
            .or(from_file.lang)
            .unwrap_or_else(|| lp_renderer::RenderOptions::default().lang),
        strict: cli.strict.or(from_file.strict).unwrap_or(false),
        extra_css: cli.extra_css.clone().or(from_file.extra_css),
    }
}

/// Log filter when `RUST_LOG` is unset: `--log-level`, then the config, then `warn`.
pub fn resolve_log_level(cli: Option<&str>, config: Option<&Config>) -> String {
    cli.map(str::to_string)
        .or_else(|| config.and_then(|c| c.log_level.clone()))
        .unwrap_or_else(|| "warn".to_string())
}
