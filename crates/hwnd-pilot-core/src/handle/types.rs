use std::str::FromStr;
use std::time::Duration;

use super::errors::HandleError;
use crate::platform::WindowRect;

/// Partial change to a window rectangle. `None` keeps the cached value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectUpdate {
    pub left: Option<i32>,
    pub top: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl RectUpdate {
    pub fn new(
        left: Option<i32>,
        top: Option<i32>,
        width: Option<i32>,
        height: Option<i32>,
    ) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Update that changes nothing
    pub fn keep() -> Self {
        Self::default()
    }

    /// Build an update from a loosely sized list of values.
    ///
    /// Every value must fit an `i32` (checked first), then exactly four
    /// values must be given.
    pub fn from_values(values: &[Option<i64>]) -> Result<Self, HandleError> {
        let narrowed = values
            .iter()
            .map(|value| match value {
                None => Ok(None),
                Some(v) => i32::try_from(*v)
                    .map(Some)
                    .map_err(|_| HandleError::InvalidRectValue {
                        value: v.to_string(),
                    }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_narrowed(&narrowed)
    }

    fn from_narrowed(values: &[Option<i32>]) -> Result<Self, HandleError> {
        match values {
            [left, top, width, height] => Ok(Self::new(*left, *top, *width, *height)),
            _ => Err(HandleError::WrongArity {
                given: values.len(),
            }),
        }
    }

    /// Merge this update over `rect`.
    pub fn apply(&self, rect: WindowRect) -> WindowRect {
        WindowRect {
            left: self.left.unwrap_or(rect.left),
            top: self.top.unwrap_or(rect.top),
            width: self.width.unwrap_or(rect.width),
            height: self.height.unwrap_or(rect.height),
        }
    }

    pub fn is_keep(&self) -> bool {
        *self == Self::keep()
    }
}

/// Parses `left,top,width,height`; `_`, `none` or an empty field keeps the
/// cached value, e.g. `10,_,800,_`.
impl FromStr for RectUpdate {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|field| {
                let field = field.trim();
                if field.is_empty() || field == "_" || field.eq_ignore_ascii_case("none") {
                    return Ok(None);
                }
                field
                    .parse::<i32>()
                    .map(Some)
                    .map_err(|_| HandleError::InvalidRectValue {
                        value: field.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_narrowed(&values)
    }
}

/// Pauses inserted between synthesized input phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTiming {
    /// Pause between the phases of a click-and-drag gesture
    pub drag_pause: Duration,
    /// Pause after a single click
    pub click_pause: Duration,
}

impl InputTiming {
    pub fn new(drag_pause: Duration, click_pause: Duration) -> Self {
        Self {
            drag_pause,
            click_pause,
        }
    }
}

impl Default for InputTiming {
    fn default() -> Self {
        Self {
            drag_pause: Duration::from_secs(1),
            click_pause: Duration::from_millis(100),
        }
    }
}
