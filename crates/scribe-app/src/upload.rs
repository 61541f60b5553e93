//! The image upload adapter.
//!
//! One multipart POST per file. The adapter performs no retries; a failure
//! is reported to the caller and contributes nothing to the draft. Retry
//! policy, if any, belongs to the caller (this system performs none).

use std::future::Future;

use reqwest::Method;
use scribe_common::{HttpClient, UploadError};
use scribe_editor_core::{FileBlob, ImageReference};

/// Boundary trait converting a raw file into a hosted image reference.
pub trait ImageUploader {
    /// Upload one file. Callers may issue several of these concurrently
    /// for a multi-file selection.
    fn upload(
        &self,
        file: &FileBlob,
    ) -> impl Future<Output = Result<ImageReference, UploadError>> + Send;
}

/// Production uploader: multipart POST against the configured endpoint.
///
/// Sends a single `file` part with the session header applied, and expects
/// a JSON body carrying `baseUrl` and `fileName`. Any non-success status or
/// unparseable body is an [`UploadError`].
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: HttpClient,
}

impl HttpUploader {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl ImageUploader for HttpUploader {
    async fn upload(&self, file: &FileBlob) -> Result<ImageReference, UploadError> {
        let part = reqwest::multipart::Part::bytes(file.data.to_vec())
            .file_name(file.name.to_string())
            .mime_str(&file.media_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .request(Method::POST, "files")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use scribe_editor_core::ImageReference;

    #[test]
    fn test_upload_response_wire_shape() {
        let image: ImageReference =
            serde_json::from_str(r#"{"baseUrl":"https://x/","fileName":"a.png"}"#).unwrap();
        assert_eq!(image.base_url, "https://x/");
        assert_eq!(image.file_name, "a.png");
        assert_eq!(image.markdown_tag(), "![](https://x/a.png)");
    }

    #[test]
    fn test_malformed_response_is_a_body_error() {
        let result = serde_json::from_str::<ImageReference>(r#"{"url":"https://x/a.png"}"#);
        assert!(result.is_err());
    }
}
