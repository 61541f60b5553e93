//! scribe-common: shared plumbing for the scribe workspace.
//!
//! Error types, configuration with pluggable persistence, and the HTTP
//! client wrapper used by the upload adapter and the remote post store.

pub mod client;
pub mod config;
pub mod error;

pub use client::{HttpClient, SESSION_HEADER};
pub use config::{Config, FileStore, Loader, Saver};
pub use error::{ScribeError, UploadError};
