//! Error types for scribe operations.
//!
//! Every failure here is continuable: an upload failure costs one image
//! reference, a resolution failure falls back to create mode, a submission
//! failure leaves the draft intact for retry. There is no fatal class.

use miette::Diagnostic;

/// Main error type for scribe operations.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ScribeError {
    /// An individual file could not be uploaded.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Upload(#[from] UploadError),

    /// The referenced post for edit mode could not be loaded.
    #[error("post {id:?} could not be resolved")]
    #[diagnostic(code(scribe::post_resolution))]
    PostResolution { id: String },

    /// The store rejected a save or update.
    #[error("submission rejected: {reason}")]
    #[diagnostic(code(scribe::submission))]
    Submission { reason: String },

    /// HTTP transport error outside the upload path.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single upload failed.
///
/// Non-fatal by contract: the caller reports it and the draft is unaffected
/// beyond the missing image reference.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum UploadError {
    /// The request never completed.
    #[error("upload transport failed: {0}")]
    #[diagnostic(code(scribe::upload::transport))]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("upload rejected with status {0}")]
    #[diagnostic(code(scribe::upload::status))]
    Status(reqwest::StatusCode),

    /// The endpoint answered 2xx but the body was not a valid image reference.
    #[error("malformed upload response: {0}")]
    #[diagnostic(code(scribe::upload::body))]
    Body(#[from] serde_json::Error),
}
