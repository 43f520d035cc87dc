use crate::errors::PilotError;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Unknown text encoding: '{label}'")]
    UnknownEncoding { label: String },

    #[error("Encoding '{label}' ({encoding}) cannot be used to write text")]
    UnsupportedEncoding {
        label: String,
        encoding: &'static str,
    },

    #[error("Text cannot be represented in {encoding}")]
    UnrepresentableText { encoding: &'static str },

    #[error("Clipboard bytes are not valid {encoding}")]
    UndecodableText { encoding: &'static str },
}

impl PilotError for ClipboardError {
    fn error_code(&self) -> &'static str {
        match self {
            ClipboardError::UnknownEncoding { .. } => "CLIPBOARD_UNKNOWN_ENCODING",
            ClipboardError::UnsupportedEncoding { .. } => "CLIPBOARD_UNSUPPORTED_ENCODING",
            ClipboardError::UnrepresentableText { .. } => "CLIPBOARD_UNREPRESENTABLE_TEXT",
            ClipboardError::UndecodableText { .. } => "CLIPBOARD_UNDECODABLE_TEXT",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ClipboardError::UnknownEncoding { .. }
                | ClipboardError::UnsupportedEncoding { .. }
                | ClipboardError::UnrepresentableText { .. }
        )
    }
}
