//! Input events accepted by the draft session, and the side requests it emits.
//!
//! Platform-agnostic definitions: a keystroke, a picker selection, and a
//! clipboard paste all arrive here as plain data. `DraftSession::apply`
//! consumes a `DraftEvent` and returns at most one `Effect` for the embedding
//! layer to execute.

use bytes::Bytes;
use smol_str::SmolStr;

use crate::post::{Mode, PostPayload};

/// A file handed over by the picker or the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
    /// Original file name, as reported by the source.
    pub name: SmolStr,
    /// Declared media type (e.g. `image/png`).
    pub media_type: SmolStr,
    pub data: Bytes,
}

impl FileBlob {
    pub fn new(
        name: impl Into<SmolStr>,
        media_type: impl Into<SmolStr>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Whether the declared media type marks this as an image.
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// One item of a paste gesture, in clipboard order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardItem {
    Text(String),
    File(FileBlob),
}

impl ClipboardItem {
    /// The file payload, if this item is an image file.
    pub fn as_image(&self) -> Option<&FileBlob> {
        match self {
            ClipboardItem::File(file) if file.is_image() => Some(file),
            _ => None,
        }
    }
}

/// Scan clipboard items in order and return the first image file, if any.
///
/// Items before the match are skipped; items after it are not inspected.
pub fn first_image_item(items: &[ClipboardItem]) -> Option<&FileBlob> {
    items.iter().find_map(ClipboardItem::as_image)
}

/// An input event for the draft session.
///
/// Each UI gesture maps 1:1 onto one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    /// Replace the title.
    TitleChanged(String),
    /// Replace the markdown content verbatim.
    ContentChanged(String),
    /// Select a top-level category. Always clears the sub-category.
    CategoryChanged(SmolStr),
    /// Select a sub-category of the current category.
    SubCategoryChanged(SmolStr),
    /// Files chosen through the picker, in selection order.
    FilesSelected(Vec<FileBlob>),
    /// A paste gesture, items in clipboard order.
    ImagePasted(Vec<ClipboardItem>),
    /// Hand the draft to the post store.
    SubmitRequested,
    /// Leave the editor without persisting anything.
    BackRequested,
}

/// A side request returned by `DraftSession::apply`.
///
/// The session never performs these itself; the embedding layer runs them
/// and folds upload results back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Upload each file independently; fold successes back in selection order.
    UploadFiles { files: Vec<FileBlob> },
    /// Upload the single image lifted out of a paste gesture.
    UploadPasted { file: FileBlob },
    /// Persist the packaged draft. `mode` picks create vs update.
    Submit { mode: Mode, payload: PostPayload },
    /// Ask the router to navigate to the previous view.
    NavigateBack,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> FileBlob {
        FileBlob::new(name, "image/png", Bytes::from_static(b"\x89PNG"))
    }

    #[test]
    fn test_first_image_item_skips_leading_text() {
        let items = vec![
            ClipboardItem::Text("caption".into()),
            ClipboardItem::File(image("shot.png")),
        ];
        assert_eq!(first_image_item(&items).unwrap().name, "shot.png");
    }

    #[test]
    fn test_first_image_item_skips_non_image_files() {
        let items = vec![
            ClipboardItem::File(FileBlob::new("notes.txt", "text/plain", &b"hi"[..])),
            ClipboardItem::File(image("shot.png")),
        ];
        assert_eq!(first_image_item(&items).unwrap().name, "shot.png");
    }

    #[test]
    fn test_first_image_item_none_without_images() {
        let items = vec![ClipboardItem::Text("just text".into())];
        assert!(first_image_item(&items).is_none());
    }
}
