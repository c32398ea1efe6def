use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Media kinds
// ============================================================================

/// Which of the two upload endpoints an asset goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Path segment of the host endpoint for this kind.
    pub fn endpoint_segment(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// The part of the host's upload response the form reads.
///
/// A body that does not decode into this shape counts as a failed upload,
/// whatever else it contains.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// HTTPS address of the stored asset.
    pub secure_url: String,
}

/// Failure of a single remote upload call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The host answered with a non-success status code.
    #[error("HTTP {0}")]
    Status(u16),
    /// The response body was unreadable or missing `secure_url`.
    #[error("unexpected response body: {0}")]
    Response(String),
}
