//! Shared types of the media upload form: the form draft with its
//! validation rules, and the wire contract of the remote media host.

pub mod aggregate;
pub mod upload;

pub use aggregate::{UploadDraft, ValidatedSubmission, ValidationError};
pub use upload::{MediaKind, UploadError, UploadResponse};
