//! hwnd-pilot-core: Drive a single top-level window through its handle
//!
//! Locate a window by class name and/or title, then move, resize, show,
//! hide or focus it, inject mouse and keyboard messages into it, and move
//! text through the system clipboard in a configurable byte encoding.
//!
//! # Main Entry Points
//!
//! - [`handle`] - The [`WindowHandle`] controller
//! - [`platform`] - OS abstraction and the Win32 backend
//! - [`clipboard`] - Clipboard text encodings
//! - [`keys`] - Virtual-key codes and key-name parsing
//! - [`config`] - Configuration management

pub mod clipboard;
pub mod config;
pub mod errors;
pub mod events;
pub mod handle;
pub mod keys;
pub mod logging;
pub mod platform;

// Re-export commonly used types at crate root for convenience
pub use clipboard::TextEncoding;
pub use config::PilotConfig;
pub use errors::{ConfigError, PilotError};
pub use handle::{HandleError, InputTiming, RectUpdate, WindowHandle};
pub use keys::{KeyError, VirtualKey, parse_key, parse_keys};
pub use platform::{
    NativePlatform, Point, ShowCommand, WindowId, WindowPlatform, WindowRect, native_platform,
};

// Re-export logging initialization
pub use logging::init_logging;
