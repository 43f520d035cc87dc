use tracing::{debug, info, warn};

use super::errors::HandleError;
use super::types::{InputTiming, RectUpdate};
use crate::clipboard::TextEncoding;
use crate::keys::VirtualKey;
use crate::platform::{
    KeyKind, MouseButton, MouseInput, Point, PlatformError, PressAction, ShowCommand, WindowId,
    WindowMessage, WindowPlatform, WindowRect, make_lparam,
};

/// Controller for one top-level window.
///
/// The window is resolved once by class name and title. Its rectangle is
/// cached at construction and only changes through [`WindowHandle::reposition`]
/// or an explicit [`WindowHandle::refresh_rect`]. Mouse and keyboard input is
/// sent as messages to the handle, so it reaches the window whether or not
/// it has focus.
#[derive(Debug)]
pub struct WindowHandle<P: WindowPlatform> {
    platform: P,
    id: WindowId,
    rect: WindowRect,
    timing: InputTiming,
}

impl<P: WindowPlatform> WindowHandle<P> {
    /// Resolve a window and cache its current rectangle.
    ///
    /// `None` for `class_name` or `title` matches any value.
    ///
    /// # Errors
    ///
    /// Returns `HandleError::InvalidHandle` when no window matches, or
    /// `HandleError::Platform` if the lookup or rectangle query fails.
    pub fn find(
        platform: P,
        class_name: Option<&str>,
        title: Option<&str>,
    ) -> Result<Self, HandleError> {
        info!(
            event = "core.handle.find_started",
            class_name = ?class_name,
            title = ?title
        );

        let id = match platform.find_window(class_name, title)? {
            Some(id) if !id.is_null() => id,
            _ => {
                warn!(
                    event = "core.handle.find_failed",
                    class_name = ?class_name,
                    title = ?title
                );
                return Err(HandleError::InvalidHandle {
                    class_name: class_name.map(str::to_string),
                    title: title.map(str::to_string),
                });
            }
        };

        let rect = query_rect(&platform, id)?;

        info!(
            event = "core.handle.find_completed",
            window = %id,
            left = rect.left,
            top = rect.top,
            width = rect.width,
            height = rect.height
        );

        Ok(Self {
            platform,
            id,
            rect,
            timing: InputTiming::default(),
        })
    }

    /// Replace the pauses used between input phases.
    pub fn with_timing(mut self, timing: InputTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Cached rectangle; may be stale if the window was moved externally.
    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn timing(&self) -> InputTiming {
        self.timing
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Read the live rectangle from the OS without touching the cache.
    pub fn query_rect(&self) -> Result<WindowRect, HandleError> {
        query_rect(&self.platform, self.id)
    }

    /// Re-read the live rectangle and store it.
    pub fn refresh_rect(&mut self) -> Result<WindowRect, HandleError> {
        let rect = self.query_rect()?;
        debug!(
            event = "core.handle.rect_refreshed",
            window = %self.id,
            previous = ?self.rect,
            current = ?rect
        );
        self.rect = rect;
        Ok(rect)
    }

    /// Move and resize the window.
    ///
    /// Fields left as `None` keep their cached values. `repaint` is passed to
    /// the OS move call. The cache is only updated once the call succeeds.
    pub fn reposition(&mut self, update: RectUpdate, repaint: bool) -> Result<(), HandleError> {
        let target = update.apply(self.rect);

        info!(
            event = "core.handle.reposition_started",
            window = %self.id,
            left = target.left,
            top = target.top,
            width = target.width,
            height = target.height,
            repaint = repaint,
            keep_cached = update.is_keep()
        );

        self.platform.move_window(self.id, target, repaint)?;
        self.rect = target;

        info!(event = "core.handle.reposition_completed", window = %self.id);
        Ok(())
    }

    /// Show the window, reposition it, then either minimize it
    /// (`ensure_hidden`) or bring it to the foreground.
    pub fn change_position(
        &mut self,
        update: RectUpdate,
        repaint: bool,
        ensure_hidden: bool,
    ) -> Result<(), HandleError> {
        debug!(
            event = "core.handle.change_position_started",
            window = %self.id,
            ensure_hidden = ensure_hidden
        );

        self.show()?;
        self.reposition(update, repaint)?;
        if ensure_hidden {
            self.minimize()
        } else {
            self.set_foreground()
        }
    }

    pub fn maximize(&self) -> Result<(), HandleError> {
        self.show_window(ShowCommand::Maximize)
    }

    pub fn minimize(&self) -> Result<(), HandleError> {
        self.show_window(ShowCommand::Minimize)
    }

    /// Show the window with its default placement
    pub fn show(&self) -> Result<(), HandleError> {
        self.show_window(ShowCommand::ShowDefault)
    }

    pub fn hide(&self) -> Result<(), HandleError> {
        self.show_window(ShowCommand::Hide)
    }

    pub fn set_foreground(&self) -> Result<(), HandleError> {
        debug!(event = "core.handle.foreground_started", window = %self.id);
        self.platform.set_foreground_window(self.id)?;
        Ok(())
    }

    fn show_window(&self, command: ShowCommand) -> Result<(), HandleError> {
        debug!(
            event = "core.handle.show_started",
            window = %self.id,
            command = ?command
        );
        self.platform.show_window(self.id, command)?;
        Ok(())
    }

    pub fn cursor_position(&self) -> Result<Point, HandleError> {
        Ok(self.platform.cursor_position()?)
    }

    pub fn set_cursor_position(&self, point: Point) -> Result<(), HandleError> {
        Ok(self.platform.set_cursor_position(point)?)
    }

    /// Press the left button at `from`, move to `to` and release.
    ///
    /// A wheel event and a relative move event are emitted between reaching
    /// `to` and the release. Each phase is followed by the drag pause.
    pub fn left_drag(&self, from: Point, to: Point) -> Result<(), HandleError> {
        let pause = self.timing.drag_pause;

        info!(
            event = "core.handle.drag_started",
            window = %self.id,
            from = ?from,
            to = ?to
        );

        self.platform.set_cursor_position(from)?;
        self.platform.pause(pause);
        self.send_button(MouseButton::Left, PressAction::Down, from)?;
        self.platform.set_cursor_position(to)?;
        self.platform.pause(pause);
        self.platform.mouse_input(MouseInput::Wheel {
            dx: from.x,
            dy: from.y,
            data: 1,
        })?;
        self.platform.mouse_input(MouseInput::Move {
            dx: 0,
            dy: 0,
            data: -1,
        })?;
        self.platform.pause(pause);
        self.send_button(MouseButton::Left, PressAction::Up, to)?;
        self.platform.pause(pause);

        info!(event = "core.handle.drag_completed", window = %self.id);
        Ok(())
    }

    /// Left click at a client-area point, then pause.
    pub fn left_click(&self, at: Point) -> Result<(), HandleError> {
        self.click(MouseButton::Left, at)
    }

    /// Right click at a client-area point, then pause.
    pub fn right_click(&self, at: Point) -> Result<(), HandleError> {
        self.click(MouseButton::Right, at)
    }

    fn click(&self, button: MouseButton, at: Point) -> Result<(), HandleError> {
        debug!(
            event = "core.handle.click_started",
            window = %self.id,
            button = ?button,
            x = at.x,
            y = at.y
        );
        self.send_button(button, PressAction::Down, at)?;
        self.send_button(button, PressAction::Up, at)?;
        self.platform.pause(self.timing.click_pause);
        Ok(())
    }

    fn send_button(
        &self,
        button: MouseButton,
        action: PressAction,
        at: Point,
    ) -> Result<(), PlatformError> {
        self.platform.send_message(
            self.id,
            WindowMessage::Button {
                button,
                action,
                lparam: make_lparam(at.x, at.y),
            },
        )
    }

    /// Move the cursor to `at` and nudge the wheel up one step.
    pub fn wheel_up(&self, at: Point) -> Result<(), HandleError> {
        self.platform.set_cursor_position(at)?;
        self.platform.mouse_input(MouseInput::Wheel {
            dx: at.x,
            dy: at.y,
            data: 1,
        })?;
        Ok(())
    }

    /// Move the cursor to `at` and nudge the wheel down one step.
    pub fn wheel_down(&self, at: Point) -> Result<(), HandleError> {
        self.platform.set_cursor_position(at)?;
        self.platform.mouse_input(MouseInput::Wheel {
            dx: 0,
            dy: 0,
            data: -1,
        })?;
        Ok(())
    }

    /// Press and release one key.
    pub fn press_key(&self, key: VirtualKey) -> Result<(), HandleError> {
        self.send_key(KeyKind::Plain, PressAction::Down, key)?;
        self.send_key(KeyKind::Plain, PressAction::Up, key)?;
        Ok(())
    }

    /// Press and release each key in turn.
    pub fn press_keys(&self, keys: &[VirtualKey]) -> Result<(), HandleError> {
        debug!(
            event = "core.handle.keys_started",
            window = %self.id,
            count = keys.len()
        );
        for key in keys {
            self.press_key(*key)?;
        }
        Ok(())
    }

    /// Hold every key down in order, then release them in the same order.
    pub fn press_chord(&self, keys: &[VirtualKey]) -> Result<(), HandleError> {
        debug!(
            event = "core.handle.chord_started",
            window = %self.id,
            keys = ?keys
        );
        for key in keys {
            self.send_key(KeyKind::System, PressAction::Down, *key)?;
        }
        for key in keys {
            self.send_key(KeyKind::System, PressAction::Up, *key)?;
        }
        Ok(())
    }

    fn send_key(
        &self,
        kind: KeyKind,
        action: PressAction,
        key: VirtualKey,
    ) -> Result<(), PlatformError> {
        self.platform
            .send_message(self.id, WindowMessage::Key { kind, action, key })
    }

    /// Read the clipboard's plain text, decoded with `encoding`.
    pub fn clipboard_text(&self, encoding: TextEncoding) -> Result<String, HandleError> {
        debug!(event = "core.handle.clipboard_read_started", encoding = %encoding);

        let bytes = {
            let session = ClipboardSession::open(&self.platform)?;
            let bytes = self.platform.clipboard_text_bytes()?;
            session.close()?;
            bytes
        };

        let text = encoding.decode(&bytes)?;
        debug!(
            event = "core.handle.clipboard_read_completed",
            bytes = bytes.len()
        );
        Ok(text)
    }

    /// Replace the clipboard contents with `text`, encoded with `encoding`.
    ///
    /// Encoding happens before the clipboard is opened, so unrepresentable
    /// text leaves the clipboard untouched.
    pub fn set_clipboard_text(
        &self,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<(), HandleError> {
        let bytes = encoding.encode(text)?;

        debug!(
            event = "core.handle.clipboard_write_started",
            encoding = %encoding,
            bytes = bytes.len()
        );

        let session = ClipboardSession::open(&self.platform)?;
        self.platform.empty_clipboard()?;
        self.platform.set_clipboard_text_bytes(&bytes)?;
        session.close()?;

        debug!(event = "core.handle.clipboard_write_completed");
        Ok(())
    }
}

fn query_rect<P: WindowPlatform>(platform: &P, id: WindowId) -> Result<WindowRect, HandleError> {
    let origin = platform.window_origin(id)?;
    let size = platform.client_size(id)?;
    Ok(WindowRect::from_parts(origin, size))
}

/// Open clipboard; closed on `close` or when dropped on an error path.
struct ClipboardSession<'a, P: WindowPlatform> {
    platform: &'a P,
    closed: bool,
}

impl<'a, P: WindowPlatform> ClipboardSession<'a, P> {
    fn open(platform: &'a P) -> Result<Self, PlatformError> {
        platform.open_clipboard()?;
        Ok(Self {
            platform,
            closed: false,
        })
    }

    fn close(mut self) -> Result<(), PlatformError> {
        self.closed = true;
        self.platform.close_clipboard()
    }
}

impl<P: WindowPlatform> Drop for ClipboardSession<'_, P> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.platform.close_clipboard() {
            warn!(event = "core.handle.clipboard_close_failed", error = %e);
        }
    }
}
