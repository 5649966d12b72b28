pub mod agenda;
pub mod document;
pub mod partner;
pub mod preview;
pub mod references;
pub mod structured_data;

pub use document::*;
pub use preview::{PreviewKind, PreviewTarget, preview_target};

/// Relative path the site fetches its content from.
pub const CONTENT_PATH: &str = "content/projects.json";

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Network(String),
    #[error("content request returned status {0}")]
    Status(u16),
    #[error("content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
