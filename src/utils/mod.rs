//! Validation, formatting, and error types shared across the client

pub mod error;
pub mod format;
pub mod validate;

// Re-export for convenience
pub use error::ApiError;
pub use format::{format_date, format_file_size, format_number, sanitize_title};
pub use validate::validate_url;
