use tracing::{error, info};

use crate::errors::PilotError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Record a failed window, input or clipboard operation with its error code.
pub fn log_operation_failed(operation: &str, error: &dyn PilotError) {
    error!(
        event = "core.app.operation_failed",
        operation = operation,
        error = %error,
        error_code = error.error_code(),
        user_error = error.is_user_error()
    );
}
