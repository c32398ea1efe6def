//! Media Upload Form - submission flow
//!
//! Drives one validated submission through the two remote calls. The
//! thumbnail goes first and the video request is only built after the
//! thumbnail call resolves; that ordering is part of the form's contract.

use super::view_model::FormStatus;
use contracts::domain::a001_media_upload::{MediaKind, UploadError, ValidatedSubmission};

/// Access to the remote media host.
///
/// The flow talks to the host only through this trait, so it can be
/// exercised on the host side with a recording transport.
pub trait UploadTransport {
    type File;

    /// Upload one file and return the secure URL of the stored asset.
    async fn upload(
        &self,
        kind: MediaKind,
        file: &Self::File,
        context: &str,
    ) -> Result<String, UploadError>;
}

/// Run the upload cycle for a validated submission.
///
/// Uploads the thumbnail, then the video, and folds the outcome into a
/// terminal [`FormStatus`]. There is no rollback: a thumbnail that was
/// already stored stays on the host when the video call fails, and the
/// user sees the same generic failure either way. One attempt per file,
/// no retry, no timeout.
pub async fn run_submission<T: UploadTransport>(
    transport: &T,
    submission: &ValidatedSubmission<T::File>,
) -> FormStatus {
    match upload_both(transport, submission).await {
        Ok((thumbnail_url, video_url)) => FormStatus::Succeeded {
            thumbnail_url,
            video_url,
        },
        Err(e) => {
            log::error!("media upload failed: {e}");
            FormStatus::Failed
        }
    }
}

async fn upload_both<T: UploadTransport>(
    transport: &T,
    submission: &ValidatedSubmission<T::File>,
) -> Result<(String, String), UploadError> {
    let context = submission.context_metadata();

    let thumbnail_url = transport
        .upload(MediaKind::Image, submission.thumbnail(), &context)
        .await?;
    let video_url = transport
        .upload(MediaKind::Video, submission.video(), &context)
        .await?;

    Ok((thumbnail_url, video_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_media_upload::UploadDraft;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingTransport {
        calls: RefCell<Vec<(MediaKind, String)>>,
        image: Result<String, UploadError>,
        video: Result<String, UploadError>,
    }

    impl RecordingTransport {
        fn new(image: Result<String, UploadError>, video: Result<String, UploadError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                image,
                video,
            }
        }

        fn kinds(&self) -> Vec<MediaKind> {
            self.calls.borrow().iter().map(|(kind, _)| *kind).collect()
        }

        fn contexts(&self) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .map(|(_, context)| context.clone())
                .collect()
        }
    }

    impl UploadTransport for RecordingTransport {
        type File = &'static str;

        async fn upload(
            &self,
            kind: MediaKind,
            _file: &&'static str,
            context: &str,
        ) -> Result<String, UploadError> {
            self.calls.borrow_mut().push((kind, context.to_string()));
            match kind {
                MediaKind::Image => self.image.clone(),
                MediaKind::Video => self.video.clone(),
            }
        }
    }

    fn submission() -> ValidatedSubmission<&'static str> {
        UploadDraft {
            title: "Demo".to_string(),
            description: "A test video".to_string(),
            thumbnail: Some("thumb.jpg"),
            video: Some("clip.mp4"),
        }
        .validate()
        .expect("draft is complete")
    }

    #[test]
    fn uploads_thumbnail_before_video() {
        let transport = RecordingTransport::new(
            Ok("https://host/u1.jpg".to_string()),
            Ok("https://host/u2.mp4".to_string()),
        );

        let status = block_on(run_submission(&transport, &submission()));

        assert_eq!(transport.kinds(), vec![MediaKind::Image, MediaKind::Video]);
        assert_eq!(
            status,
            FormStatus::Succeeded {
                thumbnail_url: "https://host/u1.jpg".to_string(),
                video_url: "https://host/u2.mp4".to_string(),
            }
        );
    }

    #[test]
    fn attaches_context_metadata_to_both_calls() {
        let transport = RecordingTransport::new(
            Ok("https://host/u1.jpg".to_string()),
            Ok("https://host/u2.mp4".to_string()),
        );

        block_on(run_submission(&transport, &submission()));

        assert_eq!(
            transport.contexts(),
            vec![
                "title=Demo|description=A test video".to_string(),
                "title=Demo|description=A test video".to_string(),
            ]
        );
    }

    #[test]
    fn video_failure_is_reported_as_generic_failure() {
        let transport = RecordingTransport::new(
            Ok("https://host/u1.jpg".to_string()),
            Err(UploadError::Status(500)),
        );

        let status = block_on(run_submission(&transport, &submission()));

        // Both calls were made, but partial success is not surfaced.
        assert_eq!(transport.kinds(), vec![MediaKind::Image, MediaKind::Video]);
        assert_eq!(status, FormStatus::Failed);
    }

    #[test]
    fn thumbnail_failure_skips_video_upload() {
        let transport = RecordingTransport::new(
            Err(UploadError::Transport("connection reset".to_string())),
            Ok("https://host/u2.mp4".to_string()),
        );

        let status = block_on(run_submission(&transport, &submission()));

        assert_eq!(transport.kinds(), vec![MediaKind::Image]);
        assert_eq!(status, FormStatus::Failed);
    }

    #[test]
    fn malformed_response_is_a_failure() {
        let transport = RecordingTransport::new(
            Ok("https://host/u1.jpg".to_string()),
            Err(UploadError::Response("missing field `secure_url`".to_string())),
        );

        let status = block_on(run_submission(&transport, &submission()));

        assert_eq!(status, FormStatus::Failed);
    }
}
