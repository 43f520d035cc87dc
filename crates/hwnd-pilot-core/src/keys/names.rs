use tracing::debug;

use super::VirtualKey;
use super::errors::KeyError;

/// Resolve a key name to its virtual-key code.
///
/// Names are case-insensitive. Accepts modifier and navigation names
/// (`ctrl`, `alt`, `shift`, `enter`, `pgdn`, ...), single letters and
/// digits, `f1`..`f24`, and raw codes written as `0x..`.
pub fn parse_key(name: &str) -> Result<VirtualKey, KeyError> {
    let trimmed = name.trim();
    let lower = trimmed.to_lowercase();

    let named = match lower.as_str() {
        "ctrl" | "control" => Some(VirtualKey::CONTROL),
        "alt" | "menu" => Some(VirtualKey::ALT),
        "shift" => Some(VirtualKey::SHIFT),
        "win" | "super" | "meta" => Some(VirtualKey::LEFT_WIN),
        "enter" | "return" => Some(VirtualKey::ENTER),
        "tab" => Some(VirtualKey::TAB),
        "esc" | "escape" => Some(VirtualKey::ESCAPE),
        "space" => Some(VirtualKey::SPACE),
        "backspace" => Some(VirtualKey::BACKSPACE),
        "delete" | "del" => Some(VirtualKey::DELETE),
        "insert" | "ins" => Some(VirtualKey::INSERT),
        "home" => Some(VirtualKey::HOME),
        "end" => Some(VirtualKey::END),
        "pageup" | "pgup" => Some(VirtualKey::PAGE_UP),
        "pagedown" | "pgdn" => Some(VirtualKey::PAGE_DOWN),
        "left" => Some(VirtualKey::LEFT),
        "right" => Some(VirtualKey::RIGHT),
        "up" => Some(VirtualKey::UP),
        "down" => Some(VirtualKey::DOWN),
        "pause" => Some(VirtualKey::PAUSE),
        "capslock" => Some(VirtualKey::CAPS_LOCK),
        _ => None,
    };

    let key = named
        .or_else(|| single_char_key(&lower))
        .or_else(|| function_key(&lower))
        .or_else(|| raw_code(&lower))
        .ok_or_else(|| KeyError::UnknownKey {
            name: trimmed.to_string(),
        })?;

    debug!(event = "core.keys.parse_completed", name = trimmed, code = key.0);
    Ok(key)
}

/// Parse a `+`-separated combination such as `ctrl+shift+s`.
pub fn parse_keys(combo: &str) -> Result<Vec<VirtualKey>, KeyError> {
    if combo.trim().is_empty() {
        return Err(KeyError::EmptyCombo);
    }
    combo.split('+').map(parse_key).collect()
}

fn single_char_key(name: &str) -> Option<VirtualKey> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => VirtualKey::from_char(c),
        _ => None,
    }
}

fn function_key(name: &str) -> Option<VirtualKey> {
    let n = name.strip_prefix('f')?.parse::<u8>().ok()?;
    VirtualKey::function(n)
}

fn raw_code(name: &str) -> Option<VirtualKey> {
    let hex = name.strip_prefix("0x")?;
    u16::from_str_radix(hex, 16).ok().map(VirtualKey)
}
