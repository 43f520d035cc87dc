use crate::clipboard::ClipboardError;
use crate::errors::PilotError;
use crate::platform::PlatformError;

#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    #[error("Invalid window handle: no window matches class {class_name:?} and title {title:?}")]
    InvalidHandle {
        class_name: Option<String>,
        title: Option<String>,
    },

    #[error("Rectangle update takes exactly 4 values ({given} given)")]
    WrongArity { given: usize },

    #[error("Rectangle values must be integers or omitted, got '{value}'")]
    InvalidRectValue { value: String },

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl PilotError for HandleError {
    fn error_code(&self) -> &'static str {
        match self {
            HandleError::InvalidHandle { .. } => "HANDLE_INVALID",
            HandleError::WrongArity { .. } => "HANDLE_RECT_WRONG_ARITY",
            HandleError::InvalidRectValue { .. } => "HANDLE_RECT_INVALID_VALUE",
            HandleError::Platform(e) => e.error_code(),
            HandleError::Clipboard(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            HandleError::InvalidHandle { .. }
            | HandleError::WrongArity { .. }
            | HandleError::InvalidRectValue { .. } => true,
            HandleError::Platform(e) => e.is_user_error(),
            HandleError::Clipboard(e) => e.is_user_error(),
        }
    }
}
