//! The draft post and the types that flow into and out of it.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The post being authored in the current session.
///
/// `content` is raw markdown source and the single source of truth for the
/// preview pane. `category`/`sub_category` are keys into the [`crate::Taxonomy`];
/// an empty string means unset.
///
/// Invariant: if `category` is empty, `sub_category` is empty. The setters on
/// [`crate::DraftSession`] maintain this; constructing a `Post` by hand is
/// expected to respect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: SmolStr,
    #[serde(default)]
    pub sub_category: SmolStr,
}

impl Post {
    /// An all-empty draft, the starting point for create mode.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Package the draft for submission to the post store.
    pub fn payload(&self) -> PostPayload {
        PostPayload {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
        }
    }

    /// Append one image tag to the content.
    ///
    /// A newline separator precedes the tag whenever the existing content is
    /// non-empty, so consecutive appends come out newline-joined.
    pub fn append_image_tag(&mut self, image: &ImageReference) {
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(&image.markdown_tag());
    }
}

/// Whether the session is creating a new post or editing an existing one.
///
/// Fixed at bootstrap; a session never switches modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit,
}

/// A hosted image, as returned by the upload endpoint.
///
/// Serialized straight into markdown image syntax and folded into the draft
/// content; once there it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    pub base_url: SmolStr,
    pub file_name: SmolStr,
}

impl ImageReference {
    pub fn new(base_url: impl Into<SmolStr>, file_name: impl Into<SmolStr>) -> Self {
        Self {
            base_url: base_url.into(),
            file_name: file_name.into(),
        }
    }

    /// The markdown image tag for this reference: `![](base_url + file_name)`.
    pub fn markdown_tag(&self) -> String {
        format!("![]({}{})", self.base_url, self.file_name)
    }
}

/// The packaged submission body.
///
/// Identical shape for create and update; the distinction is carried only by
/// [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub category: SmolStr,
    pub sub_category: SmolStr,
}

impl From<PostPayload> for Post {
    fn from(payload: PostPayload) -> Self {
        Self {
            title: payload.title,
            content: payload.content,
            category: payload.category,
            sub_category: payload.sub_category,
        }
    }
}
