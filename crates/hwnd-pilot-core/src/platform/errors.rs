use crate::errors::PilotError;

type NativeError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The native call failed; its own error is kept as the source.
    #[error("{operation} failed: {source}")]
    CallFailed {
        operation: &'static str,
        #[source]
        source: NativeError,
    },

    #[error("Clipboard holds no text")]
    NoClipboardText,

    #[error("Window control is not supported on {os}")]
    Unsupported { os: &'static str },
}

impl PlatformError {
    pub fn call_failed(operation: &'static str, source: impl Into<NativeError>) -> Self {
        PlatformError::CallFailed {
            operation,
            source: source.into(),
        }
    }

    /// Platform error for the host OS this binary was built for.
    pub fn unsupported() -> Self {
        PlatformError::Unsupported {
            os: std::env::consts::OS,
        }
    }
}

impl PilotError for PlatformError {
    fn error_code(&self) -> &'static str {
        match self {
            PlatformError::CallFailed { .. } => "PLATFORM_CALL_FAILED",
            PlatformError::NoClipboardText => "PLATFORM_NO_CLIPBOARD_TEXT",
            PlatformError::Unsupported { .. } => "PLATFORM_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PlatformError::Unsupported { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_call_failed_keeps_native_source() {
        let native = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = PlatformError::call_failed("MoveWindow", native);
        assert_eq!(error.to_string(), "MoveWindow failed: access denied");
        assert_eq!(error.error_code(), "PLATFORM_CALL_FAILED");

        let source = error.source().expect("source should be kept");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("source should be the native error");
        assert_eq!(io.kind(), std::io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_unsupported_names_host_os() {
        let error = PlatformError::unsupported();
        assert!(error.to_string().contains(std::env::consts::OS));
        assert!(error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlatformError>();
    }
}
