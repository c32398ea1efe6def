//! Media Upload Form - Model (remote upload API)

use super::flow::UploadTransport;
use contracts::domain::a001_media_upload::{MediaKind, UploadError, UploadResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Account-scoped base URL of the remote media host.
const UPLOAD_BASE_URL: &str = "https://api.cloudinary.com/v1_1/ddkiocw2i";

/// Named server-side preset that decides how uploaded assets are
/// processed and stored.
const UPLOAD_PRESET: &str = "my_present_name";

fn upload_url(kind: MediaKind) -> String {
    format!("{}/{}/upload", UPLOAD_BASE_URL, kind.endpoint_segment())
}

/// Build the multipart payload the upload endpoints expect: the binary
/// under `file`, the fixed preset, and the context metadata string.
fn multipart_payload(file: &File, context: &str) -> Result<FormData, UploadError> {
    let form = FormData::new().map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_str("upload_preset", UPLOAD_PRESET)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_str("context", context)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    Ok(form)
}

/// Upload one file and return the secure URL of the stored asset.
///
/// The browser supplies the multipart boundary itself, so no Content-Type
/// header is set here.
pub async fn upload_file(kind: MediaKind, file: &File, context: &str) -> Result<String, UploadError> {
    let payload = multipart_payload(file, context)?;

    let response = Request::post(&upload_url(kind))
        .body(payload)
        .map_err(|e| UploadError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| UploadError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(UploadError::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| UploadError::Response(e.to_string()))?;
    let parsed: UploadResponse =
        serde_json::from_str(&text).map_err(|e| UploadError::Response(e.to_string()))?;

    Ok(parsed.secure_url)
}

/// Transport backed by the real media host.
pub struct CloudinaryTransport;

impl UploadTransport for CloudinaryTransport {
    type File = File;

    async fn upload(&self, kind: MediaKind, file: &File, context: &str) -> Result<String, UploadError> {
        upload_file(kind, file, context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_urls_are_per_kind() {
        assert_eq!(
            upload_url(MediaKind::Image),
            "https://api.cloudinary.com/v1_1/ddkiocw2i/image/upload"
        );
        assert_eq!(
            upload_url(MediaKind::Video),
            "https://api.cloudinary.com/v1_1/ddkiocw2i/video/upload"
        );
    }
}
