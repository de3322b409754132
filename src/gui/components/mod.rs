//! GUI components

pub mod download_result;
pub mod format_table;
pub mod url_input;
pub mod video_summary;

// Re-export for convenience
pub use download_result::download_result;
pub use format_table::format_table;
pub use url_input::url_input;
pub use video_summary::video_summary;
