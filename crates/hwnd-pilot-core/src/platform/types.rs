use serde::{Deserialize, Serialize};

use crate::keys::VirtualKey;

/// Opaque OS identifier of a top-level window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(isize);

impl WindowId {
    pub const fn new(raw: isize) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> isize {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A point in screen (or client) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Client-area size of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Window geometry cached by the controller.
///
/// `left`/`top` come from the window's restored placement, `width`/`height`
/// from its client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }
}

/// Visibility change applied through the OS show-window call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowCommand {
    Maximize,
    Minimize,
    ShowDefault,
    Hide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    Down,
    Up,
}

/// Plain key messages versus system key messages (used for chords)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Plain,
    System,
}

/// A message delivered directly to a window handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMessage {
    Button {
        button: MouseButton,
        action: PressAction,
        /// Client coordinates packed with [`make_lparam`]
        lparam: isize,
    },
    Key {
        kind: KeyKind,
        action: PressAction,
        key: VirtualKey,
    },
}

/// Synthesized global mouse input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseInput {
    Wheel { dx: i32, dy: i32, data: i32 },
    Move { dx: i32, dy: i32, data: i32 },
}

/// Pack two coordinates into one message parameter.
///
/// The low 16 bits of `x` form the low word and the low 16 bits of `y` the
/// high word, so negative coordinates keep their two's-complement bits.
pub fn make_lparam(x: i32, y: i32) -> isize {
    let low = (x as u16) as u32;
    let high = (y as u16) as u32;
    ((high << 16) | low) as isize
}
