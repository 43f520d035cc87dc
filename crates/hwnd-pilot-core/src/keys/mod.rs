//! Virtual-key codes and key-name parsing.

pub mod errors;
pub mod names;

pub use errors::KeyError;
pub use names::{parse_key, parse_keys};

use serde::{Deserialize, Serialize};

/// An OS virtual-key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VirtualKey(pub u16);

impl VirtualKey {
    pub const BACKSPACE: VirtualKey = VirtualKey(0x08);
    pub const TAB: VirtualKey = VirtualKey(0x09);
    pub const ENTER: VirtualKey = VirtualKey(0x0D);
    pub const SHIFT: VirtualKey = VirtualKey(0x10);
    pub const CONTROL: VirtualKey = VirtualKey(0x11);
    pub const ALT: VirtualKey = VirtualKey(0x12);
    pub const PAUSE: VirtualKey = VirtualKey(0x13);
    pub const CAPS_LOCK: VirtualKey = VirtualKey(0x14);
    pub const ESCAPE: VirtualKey = VirtualKey(0x1B);
    pub const SPACE: VirtualKey = VirtualKey(0x20);
    pub const PAGE_UP: VirtualKey = VirtualKey(0x21);
    pub const PAGE_DOWN: VirtualKey = VirtualKey(0x22);
    pub const END: VirtualKey = VirtualKey(0x23);
    pub const HOME: VirtualKey = VirtualKey(0x24);
    pub const LEFT: VirtualKey = VirtualKey(0x25);
    pub const UP: VirtualKey = VirtualKey(0x26);
    pub const RIGHT: VirtualKey = VirtualKey(0x27);
    pub const DOWN: VirtualKey = VirtualKey(0x28);
    pub const INSERT: VirtualKey = VirtualKey(0x2D);
    pub const DELETE: VirtualKey = VirtualKey(0x2E);
    pub const LEFT_WIN: VirtualKey = VirtualKey(0x5B);
    pub const F1: VirtualKey = VirtualKey(0x70);

    /// Key for an ASCII letter or digit (`'a'` and `'A'` map to the same key).
    pub fn from_char(c: char) -> Option<VirtualKey> {
        match c {
            'a'..='z' => Some(VirtualKey(c.to_ascii_uppercase() as u16)),
            'A'..='Z' | '0'..='9' => Some(VirtualKey(c as u16)),
            _ => None,
        }
    }

    /// Function key `F<n>` for `n` in `1..=24`.
    pub fn function(n: u8) -> Option<VirtualKey> {
        (1..=24)
            .contains(&n)
            .then(|| VirtualKey(Self::F1.0 + u16::from(n) - 1))
    }

    pub fn code(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
