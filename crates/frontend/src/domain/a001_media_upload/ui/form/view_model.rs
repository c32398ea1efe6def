//! Media Upload Form - ViewModel (submission state machine and commands)

use super::flow;
use super::model::CloudinaryTransport;
use contracts::domain::a001_media_upload::UploadDraft;
use leptos::prelude::*;
use web_sys::File;

/// Submission lifecycle of the upload form.
///
/// `Uploading` is the only busy state; every other variant is a resting
/// state in which the submit control is live again. Terminal variants keep
/// their message until the next submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Uploading,
    /// Validation rejected the submission before any network call.
    Rejected(String),
    Succeeded {
        thumbnail_url: String,
        video_url: String,
    },
    Failed,
}

impl FormStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormStatus::Uploading)
    }

    /// Status line shown under the form, if any.
    ///
    /// Entering `Uploading` clears the previous line; the two upload calls
    /// are not distinguished in the failure text.
    pub fn message(&self) -> Option<String> {
        match self {
            FormStatus::Idle | FormStatus::Uploading => None,
            FormStatus::Rejected(reason) => Some(reason.clone()),
            FormStatus::Succeeded {
                thumbnail_url,
                video_url,
            } => Some(format!(
                "Upload Successful! Thumbnail URL: {}, Video URL: {}",
                thumbnail_url, video_url
            )),
            FormStatus::Failed => Some("Upload failed. Please try again.".to_string()),
        }
    }
}

/// ViewModel for the media upload form
#[derive(Clone)]
pub struct UploadFormViewModel {
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub thumbnail: RwSignal<Option<File>, LocalStorage>,
    pub video: RwSignal<Option<File>, LocalStorage>,
    pub status: RwSignal<FormStatus>,
}

impl UploadFormViewModel {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            thumbnail: RwSignal::new_local(None),
            video: RwSignal::new_local(None),
            status: RwSignal::new(FormStatus::Idle),
        }
    }

    /// Snapshot of the current form fields.
    fn draft(&self) -> UploadDraft<File> {
        UploadDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            thumbnail: self.thumbnail.get_untracked(),
            video: self.video.get_untracked(),
        }
    }

    /// Validate the form and run the upload cycle.
    ///
    /// Inert while a submission is already in flight. Validation happens
    /// synchronously, so a rejected submission never enters the busy state
    /// and never reaches the network.
    pub fn submit_command(&self) {
        if self.status.get_untracked().is_busy() {
            return;
        }

        let submission = match self.draft().validate() {
            Ok(submission) => submission,
            Err(e) => {
                self.status.set(FormStatus::Rejected(e.to_string()));
                return;
            }
        };

        self.status.set(FormStatus::Uploading);

        let status = self.status;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = flow::run_submission(&CloudinaryTransport, &submission).await;
            status.set(outcome);
        });
    }
}

impl Default for UploadFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
