pub mod errors;
pub mod handler;
pub mod types;

pub use errors::HandleError;
pub use handler::WindowHandle;
pub use types::{InputTiming, RectUpdate};
