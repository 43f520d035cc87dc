//! Loading and merging of config files.
//!
//! Later sources override earlier ones:
//! 1. Built-in defaults
//! 2. User config, `~/.hwnd-pilot/config.toml`
//! 3. Project config, `./.hwnd-pilot/config.toml`
//! 4. CLI flags (applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::{ClipboardConfig, PilotConfig, TimingConfig};
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".hwnd-pilot";
const CONFIG_FILE: &str = "config.toml";

/// Load and validate the merged configuration.
///
/// Missing files are skipped. Unreadable or malformed files fail.
pub fn load_hierarchy() -> Result<PilotConfig, ConfigError> {
    let mut config = PilotConfig::default();

    if let Some(path) = user_config_path() {
        config = merge_optional(config, &path)?;
    }

    let project_path = project_config_path()?;
    config = merge_optional(config, &project_path)?;

    validate_config(&config)?;
    info!(
        event = "core.config.load_completed",
        drag_pause_ms = config.timing.drag_pause_ms(),
        click_pause_ms = config.timing.click_pause_ms(),
        encoding = config.clipboard.encoding_label()
    );
    Ok(config)
}

fn merge_optional(base: PilotConfig, path: &Path) -> Result<PilotConfig, ConfigError> {
    match load_config_file(path) {
        Ok(loaded) => Ok(merge_configs(base, loaded)),
        Err(e) if e.is_not_found() => {
            debug!(event = "core.config.file_missing", path = %path.display());
            Ok(base)
        }
        Err(e) => Err(e),
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn project_config_path() -> Result<PathBuf, ConfigError> {
    let cwd = std::env::current_dir()
        .map_err(|source| ConfigError::CurrentDirUnavailable { source })?;
    Ok(cwd.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read a single config file without validating it.
pub fn load_config_file(path: &Path) -> Result<PilotConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, `override_config` winning where it sets a value.
pub fn merge_configs(base: PilotConfig, override_config: PilotConfig) -> PilotConfig {
    PilotConfig {
        timing: TimingConfig {
            drag_pause_ms: override_config
                .timing
                .drag_pause_ms
                .or(base.timing.drag_pause_ms),
            click_pause_ms: override_config
                .timing
                .click_pause_ms
                .or(base.timing.click_pause_ms),
        },
        clipboard: ClipboardConfig {
            encoding: override_config.clipboard.encoding.or(base.clipboard.encoding),
        },
    }
}

/// Reject settings that would only fail later, at use.
pub fn validate_config(config: &PilotConfig) -> Result<(), ConfigError> {
    config.encoding().map(|_| ())
}
