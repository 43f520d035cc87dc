//! Clipboard text encodings.
//!
//! The clipboard is exchanged in the legacy plain-text format, so text has
//! to be converted to and from a byte encoding chosen by the caller.

pub mod encoding;
pub mod errors;

pub use encoding::{DEFAULT_ENCODING_LABEL, TextEncoding};
pub use errors::ClipboardError;
