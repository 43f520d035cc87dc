//! Configuration types deserialized from `config.toml`.
//!
//! ```toml
//! [timing]
//! drag_pause_ms = 1000
//! click_pause_ms = 100
//!
//! [clipboard]
//! encoding = "gbk"
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clipboard::{ClipboardError, DEFAULT_ENCODING_LABEL, TextEncoding};
use crate::errors::ConfigError;
use crate::handle::InputTiming;

/// Default pause between drag phases in milliseconds.
pub const DEFAULT_DRAG_PAUSE_MS: u64 = 1000;

/// Default pause after a click in milliseconds.
pub const DEFAULT_CLICK_PAUSE_MS: u64 = 100;

/// Settings loaded from the user and project config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PilotConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Pauses used by synthesized mouse input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TimingConfig {
    /// Pause between drag phases. Default: 1000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_pause_ms: Option<u64>,

    /// Pause after each click. Default: 100ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_pause_ms: Option<u64>,
}

impl TimingConfig {
    pub fn drag_pause_ms(&self) -> u64 {
        self.drag_pause_ms.unwrap_or(DEFAULT_DRAG_PAUSE_MS)
    }

    pub fn click_pause_ms(&self) -> u64 {
        self.click_pause_ms.unwrap_or(DEFAULT_CLICK_PAUSE_MS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClipboardConfig {
    /// Encoding label for clipboard text. Default: `gbk`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl ClipboardConfig {
    pub fn encoding_label(&self) -> &str {
        self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING_LABEL)
    }
}

impl PilotConfig {
    /// Input timing with defaults filled in.
    pub fn timing(&self) -> InputTiming {
        InputTiming::new(
            Duration::from_millis(self.timing.drag_pause_ms()),
            Duration::from_millis(self.timing.click_pause_ms()),
        )
    }

    /// Resolve the configured clipboard encoding.
    pub fn encoding(&self) -> Result<TextEncoding, ConfigError> {
        let label = self.clipboard.encoding_label();
        TextEncoding::from_label(label).map_err(|e| match e {
            ClipboardError::UnsupportedEncoding { .. } => ConfigError::UnsupportedEncoding {
                label: label.to_string(),
            },
            _ => ConfigError::InvalidEncoding {
                label: label.to_string(),
            },
        })
    }
}
