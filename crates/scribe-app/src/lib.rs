//! scribe-app: the application layer around the draft session.
//!
//! Wires `scribe-editor-core` to its collaborators:
//! - `upload` - the image upload adapter (multipart POST per file)
//! - `store` - the post store boundary, in-memory and HTTP implementations
//! - `session` - bootstrap: resolve an optional route id into a draft + mode
//! - `bridge` - gesture dispatch, effect execution, and the two pane views
//! - `data` - the built-in taxonomy and the seed posts for the memory store

pub mod bridge;
pub mod data;
pub mod session;
pub mod store;
pub mod upload;


pub use bridge::{
    EditorBridge, EditorPane, Gesture, MarkdownRenderer, Navigator, Notice, PreviewPane,
    PreviewScroll,
};
pub use session::{SessionInit, initialize, query_id};
pub use store::{HttpStore, MemoryStore, PostStore};
pub use upload::{HttpUploader, ImageUploader};
