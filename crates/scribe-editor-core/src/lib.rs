//! scribe-editor-core: Pure draft-authoring logic without framework dependencies.
//!
//! This crate provides:
//! - `Post` - the draft being authored, and its submission payload
//! - `Taxonomy` - the static two-level category lookup
//! - `DraftEvent` / `Effect` - inputs to and side requests from the session
//! - `DraftSession` - the state machine that owns the draft
//!
//! Nothing here performs I/O. Uploads, persistence, and navigation are
//! expressed as `Effect` values for the embedding layer to execute, with
//! upload results folded back in through `DraftSession::append_images`.

pub mod events;
pub mod post;
pub mod session;
pub mod taxonomy;

#[cfg(test)]
mod tests;

pub use events::{ClipboardItem, DraftEvent, Effect, FileBlob, first_image_item};
pub use post::{ImageReference, Mode, Post, PostPayload};
pub use session::{DraftSession, SessionState};
pub use smol_str::SmolStr;
pub use taxonomy::{Category, CategoryOption, Taxonomy};
