use thiserror::Error;

// ============================================================================
// Validation error
// ============================================================================

/// A submission was attempted with at least one required field missing.
///
/// The four fields are reported as one message; the form does not point at
/// individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("All fields are required!")]
pub struct ValidationError;

// ============================================================================
// Form draft
// ============================================================================

/// Current contents of the upload form.
///
/// Generic over the file-handle type `F`: in the browser the handles are
/// `web_sys::File`, while host-side tests substitute plain values.
#[derive(Debug, Clone)]
pub struct UploadDraft<F> {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<F>,
    pub video: Option<F>,
}

impl<F> Default for UploadDraft<F> {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            thumbnail: None,
            video: None,
        }
    }
}

impl<F: Clone> UploadDraft<F> {
    /// Check that title, description, thumbnail and video are all populated.
    ///
    /// Strings count as populated when non-empty. They are not trimmed, so
    /// whitespace-only input passes.
    pub fn validate(&self) -> Result<ValidatedSubmission<F>, ValidationError> {
        match (&self.thumbnail, &self.video) {
            (Some(thumbnail), Some(video))
                if !self.title.is_empty() && !self.description.is_empty() =>
            {
                Ok(ValidatedSubmission {
                    title: self.title.clone(),
                    description: self.description.clone(),
                    thumbnail: thumbnail.clone(),
                    video: video.clone(),
                })
            }
            _ => Err(ValidationError),
        }
    }
}

// ============================================================================
// Validated submission
// ============================================================================

/// A draft that passed validation.
///
/// This is the only input the upload flow accepts, so a submission cannot
/// reach the network with a field missing.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission<F> {
    title: String,
    description: String,
    thumbnail: F,
    video: F,
}

impl<F> ValidatedSubmission<F> {
    pub fn thumbnail(&self) -> &F {
        &self.thumbnail
    }

    pub fn video(&self) -> &F {
        &self.video
    }

    /// Context metadata attached to both uploads and carried through to the
    /// host's asset record: `title=<title>|description=<description>`.
    pub fn context_metadata(&self) -> String {
        format!("title={}|description={}", self.title, self.description)
    }
}
