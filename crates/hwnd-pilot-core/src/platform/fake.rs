//! Recording in-memory platform for controller tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::time::Duration;

use super::{
    MouseInput, PlatformError, Point, ShowCommand, Size, WindowId, WindowMessage, WindowPlatform,
    WindowRect,
};

pub(crate) const FAKE_WINDOW: WindowId = WindowId::new(0x1234);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    FindWindow {
        class_name: Option<String>,
        title: Option<String>,
    },
    WindowOrigin,
    ClientSize,
    MoveWindow {
        rect: WindowRect,
        repaint: bool,
    },
    ShowWindow(ShowCommand),
    SetForeground,
    CursorPosition,
    SetCursor(Point),
    Mouse(MouseInput),
    Message(WindowMessage),
    OpenClipboard,
    CloseClipboard,
    EmptyClipboard,
    ReadClipboard,
    WriteClipboard(Vec<u8>),
    Pause(Duration),
}

#[derive(Debug)]
pub(crate) struct FakePlatform {
    window: Option<WindowId>,
    origin: Cell<Point>,
    size: Cell<Size>,
    cursor: Cell<Point>,
    clipboard: RefCell<Option<Vec<u8>>>,
    clipboard_open: Cell<bool>,
    failing: RefCell<HashSet<&'static str>>,
    calls: RefCell<Vec<Call>>,
}

impl FakePlatform {
    /// A desktop with one window at (100, 50) with an 800x600 client area.
    pub(crate) fn new() -> Self {
        Self {
            window: Some(FAKE_WINDOW),
            origin: Cell::new(Point::new(100, 50)),
            size: Cell::new(Size {
                width: 800,
                height: 600,
            }),
            cursor: Cell::new(Point::default()),
            clipboard: RefCell::new(None),
            clipboard_open: Cell::new(false),
            failing: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn without_window() -> Self {
        Self {
            window: None,
            ..Self::new()
        }
    }

    pub(crate) fn with_geometry(self, origin: Point, size: Size) -> Self {
        self.origin.set(origin);
        self.size.set(size);
        self
    }

    /// Make the named operation fail from now on.
    pub(crate) fn fail_on(&self, operation: &'static str) {
        self.failing.borrow_mut().insert(operation);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn pauses(&self) -> Vec<Duration> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Pause(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn clipboard_is_open(&self) -> bool {
        self.clipboard_open.get()
    }

    pub(crate) fn put_clipboard(&self, bytes: &[u8]) {
        *self.clipboard.borrow_mut() = Some(bytes.to_vec());
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn check(&self, operation: &'static str) -> Result<(), PlatformError> {
        if self.failing.borrow().contains(operation) {
            return Err(PlatformError::call_failed(
                operation,
                std::io::Error::other(format!("{operation} refused by fake")),
            ));
        }
        Ok(())
    }
}

impl WindowPlatform for FakePlatform {
    fn find_window(
        &self,
        class_name: Option<&str>,
        title: Option<&str>,
    ) -> Result<Option<WindowId>, PlatformError> {
        self.record(Call::FindWindow {
            class_name: class_name.map(str::to_string),
            title: title.map(str::to_string),
        });
        self.check("FindWindowW")?;
        Ok(self.window)
    }

    fn window_origin(&self, _window: WindowId) -> Result<Point, PlatformError> {
        self.record(Call::WindowOrigin);
        self.check("GetWindowPlacement")?;
        Ok(self.origin.get())
    }

    fn client_size(&self, _window: WindowId) -> Result<Size, PlatformError> {
        self.record(Call::ClientSize);
        self.check("GetClientRect")?;
        Ok(self.size.get())
    }

    fn move_window(
        &self,
        _window: WindowId,
        rect: WindowRect,
        repaint: bool,
    ) -> Result<(), PlatformError> {
        self.record(Call::MoveWindow { rect, repaint });
        self.check("MoveWindow")?;
        self.origin.set(Point::new(rect.left, rect.top));
        self.size.set(Size {
            width: rect.width,
            height: rect.height,
        });
        Ok(())
    }

    fn show_window(&self, _window: WindowId, command: ShowCommand) -> Result<(), PlatformError> {
        self.record(Call::ShowWindow(command));
        self.check("ShowWindow")
    }

    fn set_foreground_window(&self, _window: WindowId) -> Result<(), PlatformError> {
        self.record(Call::SetForeground);
        self.check("SetForegroundWindow")
    }

    fn cursor_position(&self) -> Result<Point, PlatformError> {
        self.record(Call::CursorPosition);
        self.check("GetCursorPos")?;
        Ok(self.cursor.get())
    }

    fn set_cursor_position(&self, point: Point) -> Result<(), PlatformError> {
        self.record(Call::SetCursor(point));
        self.check("SetCursorPos")?;
        self.cursor.set(point);
        Ok(())
    }

    fn mouse_input(&self, input: MouseInput) -> Result<(), PlatformError> {
        self.record(Call::Mouse(input));
        self.check("mouse_event")
    }

    fn send_message(&self, _window: WindowId, message: WindowMessage) -> Result<(), PlatformError> {
        self.record(Call::Message(message));
        self.check("SendMessageW")
    }

    fn open_clipboard(&self) -> Result<(), PlatformError> {
        self.record(Call::OpenClipboard);
        self.check("OpenClipboard")?;
        self.clipboard_open.set(true);
        Ok(())
    }

    fn close_clipboard(&self) -> Result<(), PlatformError> {
        self.record(Call::CloseClipboard);
        self.clipboard_open.set(false);
        self.check("CloseClipboard")
    }

    fn empty_clipboard(&self) -> Result<(), PlatformError> {
        self.record(Call::EmptyClipboard);
        self.check("EmptyClipboard")?;
        *self.clipboard.borrow_mut() = None;
        Ok(())
    }

    fn clipboard_text_bytes(&self) -> Result<Vec<u8>, PlatformError> {
        self.record(Call::ReadClipboard);
        self.check("GetClipboardData")?;
        self.clipboard
            .borrow()
            .clone()
            .ok_or(PlatformError::NoClipboardText)
    }

    fn set_clipboard_text_bytes(&self, bytes: &[u8]) -> Result<(), PlatformError> {
        self.record(Call::WriteClipboard(bytes.to_vec()));
        self.check("SetClipboardData")?;
        *self.clipboard.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }

    fn pause(&self, duration: Duration) {
        self.record(Call::Pause(duration));
    }
}
