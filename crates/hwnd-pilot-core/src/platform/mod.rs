//! Narrow interface over the OS windowing, input and clipboard calls.
//!
//! The controller in [`crate::handle`] only talks to [`WindowPlatform`], so
//! it can be driven by the Win32 implementation in production and by a
//! recording fake in tests.

use std::time::Duration;

pub mod errors;
pub mod types;

#[cfg(windows)]
pub mod win32;

#[cfg(test)]
pub(crate) mod fake;

pub use errors::PlatformError;
pub use types::{
    KeyKind, MouseButton, MouseInput, Point, PressAction, ShowCommand, Size, WindowId,
    WindowMessage, WindowRect, make_lparam,
};

/// OS capabilities the window controller needs.
///
/// Every method maps onto a single native call. Implementations report
/// native failures as [`PlatformError::CallFailed`] and do not retry.
pub trait WindowPlatform {
    /// Look up a top-level window. `None` for either argument matches any value.
    fn find_window(
        &self,
        class_name: Option<&str>,
        title: Option<&str>,
    ) -> Result<Option<WindowId>, PlatformError>;

    /// Top-left corner of the window's restored placement
    fn window_origin(&self, window: WindowId) -> Result<Point, PlatformError>;

    fn client_size(&self, window: WindowId) -> Result<Size, PlatformError>;

    fn move_window(
        &self,
        window: WindowId,
        rect: WindowRect,
        repaint: bool,
    ) -> Result<(), PlatformError>;

    fn show_window(&self, window: WindowId, command: ShowCommand) -> Result<(), PlatformError>;

    fn set_foreground_window(&self, window: WindowId) -> Result<(), PlatformError>;

    fn cursor_position(&self) -> Result<Point, PlatformError>;

    fn set_cursor_position(&self, point: Point) -> Result<(), PlatformError>;

    fn mouse_input(&self, input: MouseInput) -> Result<(), PlatformError>;

    /// Deliver a message synchronously to `window`, regardless of focus.
    fn send_message(&self, window: WindowId, message: WindowMessage) -> Result<(), PlatformError>;

    fn open_clipboard(&self) -> Result<(), PlatformError>;

    fn close_clipboard(&self) -> Result<(), PlatformError>;

    fn empty_clipboard(&self) -> Result<(), PlatformError>;

    /// Raw plain-text clipboard bytes, without the trailing NUL
    fn clipboard_text_bytes(&self) -> Result<Vec<u8>, PlatformError>;

    /// Store `bytes` as plain text; a trailing NUL is added by the implementation
    fn set_clipboard_text_bytes(&self, bytes: &[u8]) -> Result<(), PlatformError>;

    /// Block the calling thread between input phases.
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(windows)]
pub type NativePlatform = win32::Win32Platform;

/// Stand-in for hosts without a supported windowing API. It has no values,
/// so none of its methods can ever run.
#[cfg(not(windows))]
#[derive(Debug)]
pub enum UnsupportedPlatform {}

#[cfg(not(windows))]
pub type NativePlatform = UnsupportedPlatform;

/// Platform backend for the current OS.
///
/// # Errors
///
/// Returns [`PlatformError::Unsupported`] on hosts without a Win32 API.
#[cfg(windows)]
pub fn native_platform() -> Result<NativePlatform, PlatformError> {
    Ok(win32::Win32Platform::new())
}

/// Platform backend for the current OS.
///
/// # Errors
///
/// Returns [`PlatformError::Unsupported`] on hosts without a Win32 API.
#[cfg(not(windows))]
pub fn native_platform() -> Result<NativePlatform, PlatformError> {
    tracing::warn!(
        event = "core.platform.unsupported",
        os = std::env::consts::OS
    );
    Err(PlatformError::unsupported())
}

#[cfg(not(windows))]
impl WindowPlatform for UnsupportedPlatform {
    fn find_window(
        &self,
        _: Option<&str>,
        _: Option<&str>,
    ) -> Result<Option<WindowId>, PlatformError> {
        match *self {}
    }

    fn window_origin(&self, _: WindowId) -> Result<Point, PlatformError> {
        match *self {}
    }

    fn client_size(&self, _: WindowId) -> Result<Size, PlatformError> {
        match *self {}
    }

    fn move_window(&self, _: WindowId, _: WindowRect, _: bool) -> Result<(), PlatformError> {
        match *self {}
    }

    fn show_window(&self, _: WindowId, _: ShowCommand) -> Result<(), PlatformError> {
        match *self {}
    }

    fn set_foreground_window(&self, _: WindowId) -> Result<(), PlatformError> {
        match *self {}
    }

    fn cursor_position(&self) -> Result<Point, PlatformError> {
        match *self {}
    }

    fn set_cursor_position(&self, _: Point) -> Result<(), PlatformError> {
        match *self {}
    }

    fn mouse_input(&self, _: MouseInput) -> Result<(), PlatformError> {
        match *self {}
    }

    fn send_message(&self, _: WindowId, _: WindowMessage) -> Result<(), PlatformError> {
        match *self {}
    }

    fn open_clipboard(&self) -> Result<(), PlatformError> {
        match *self {}
    }

    fn close_clipboard(&self) -> Result<(), PlatformError> {
        match *self {}
    }

    fn empty_clipboard(&self) -> Result<(), PlatformError> {
        match *self {}
    }

    fn clipboard_text_bytes(&self) -> Result<Vec<u8>, PlatformError> {
        match *self {}
    }

    fn set_clipboard_text_bytes(&self, _: &[u8]) -> Result<(), PlatformError> {
        match *self {}
    }
}
