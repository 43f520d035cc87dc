//! Hierarchical TOML configuration.
//!
//! ```rust,no_run
//! use hwnd_pilot_core::config::PilotConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PilotConfig::load_hierarchy()?;
//!     let timing = config.timing();
//!     let encoding = config.encoding()?;
//!     Ok(())
//! }
//! ```

pub mod loading;
pub mod types;

pub use loading::{load_config_file, merge_configs, validate_config};
pub use types::{
    ClipboardConfig, DEFAULT_CLICK_PAUSE_MS, DEFAULT_DRAG_PAUSE_MS, PilotConfig, TimingConfig,
};

impl PilotConfig {
    /// Load the user and project config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }
}
