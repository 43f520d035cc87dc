use crate::errors::PilotError;

#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("Unknown key name: '{name}'")]
    UnknownKey { name: String },

    #[error("Key combination is empty")]
    EmptyCombo,
}

impl PilotError for KeyError {
    fn error_code(&self) -> &'static str {
        match self {
            KeyError::UnknownKey { .. } => "KEY_UNKNOWN",
            KeyError::EmptyCombo => "KEY_EMPTY_COMBO",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
