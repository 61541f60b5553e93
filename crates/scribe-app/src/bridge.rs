//! The presentation bridge.
//!
//! Maps each raw UI gesture 1:1 to a draft event, runs the effects the
//! session returns, and projects the draft into the two pane view-models.
//! The bridge holds no draft state of its own; the session owns the draft,
//! the collaborators stay behind traits, and user-visible feedback comes
//! out as a typed [`Notice`] stream rather than log-only reporting.

use futures_util::future::join_all;
use smol_str::SmolStr;

use scribe_common::{ScribeError, UploadError};
use scribe_editor_core::{
    CategoryOption, ClipboardItem, DraftEvent, DraftSession, Effect, FileBlob, Mode, Post,
    Taxonomy,
};

use crate::session;
use crate::store::PostStore;
use crate::upload::ImageUploader;

/// A raw UI gesture, before it becomes a draft event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    EditTitle(String),
    EditContent(String),
    PickCategory(SmolStr),
    PickSubCategory(SmolStr),
    PickFiles(Vec<FileBlob>),
    Paste(Vec<ClipboardItem>),
    Submit,
    Back,
}

/// User-visible feedback emitted by the bridge.
///
/// The embedding UI drains these and decides how to present them; the
/// draft is already consistent by the time a notice is emitted.
#[derive(Debug)]
pub enum Notice {
    /// One file of a selection or paste failed to upload.
    UploadFailed { file: SmolStr, error: UploadError },
    /// The store rejected the save; the draft is preserved for retry.
    SubmissionFailed { error: ScribeError },
    /// An edit id could not be resolved; the session fell back to create mode.
    LoadFallback { error: ScribeError },
    /// The draft was persisted.
    Saved { mode: Mode },
}

/// Scroll behavior for the preview pane on the next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewScroll {
    /// Pin to the bottom - applied whenever the content was just retyped.
    PinToBottom,
    /// Leave the position alone.
    Preserve,
}

/// External collaborator: the markdown renderer.
///
/// A pure function from markdown source to display nodes; the node type is
/// whatever the embedding UI renders.
pub trait MarkdownRenderer {
    type Node;

    fn render(&self, source: &str) -> Vec<Self::Node>;
}

/// External collaborator: the router.
pub trait Navigator {
    /// Navigate to the previous view. Persists nothing.
    fn go_back(&self);
}

/// View-model for the editing pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPane {
    pub title: String,
    pub content: String,
    pub category: SmolStr,
    pub sub_category: SmolStr,
    pub category_options: Vec<CategoryOption>,
    /// Sub-options for the currently selected category; empty when none is.
    pub sub_category_options: Vec<CategoryOption>,
    /// The sub-category select is inert until a category is chosen.
    pub sub_select_enabled: bool,
}

/// View-model for the rendered preview pane.
#[derive(Debug)]
pub struct PreviewPane<N> {
    pub title: String,
    pub nodes: Vec<N>,
    pub scroll: PreviewScroll,
}

/// Binds one draft session to its collaborators for the life of a view.
pub struct EditorBridge<U, S, N, R> {
    session: DraftSession,
    taxonomy: Taxonomy,
    uploader: U,
    store: S,
    navigator: N,
    renderer: R,
    /// Id of the post being edited; `None` in create mode.
    edit_id: Option<String>,
    notices: Vec<Notice>,
    pin_preview: bool,
}

impl<U, S, N, R> EditorBridge<U, S, N, R>
where
    U: ImageUploader,
    S: PostStore,
    N: Navigator,
    R: MarkdownRenderer,
{
    /// Bootstrap a session from an optional route id and enter `Ready`.
    pub async fn start(
        route_id: Option<&str>,
        taxonomy: Taxonomy,
        uploader: U,
        store: S,
        navigator: N,
        renderer: R,
    ) -> Self {
        let mut session = DraftSession::bootstrapping();
        let init = session::initialize(route_id, &store).await;

        let mut notices = Vec::new();
        if let Some(error) = init.fallback {
            notices.push(Notice::LoadFallback { error });
        }
        let edit_id = match init.mode {
            Mode::Edit => route_id.map(str::to_owned),
            Mode::Create => None,
        };
        session.resolve(init.post, init.mode);

        Self {
            session,
            taxonomy,
            uploader,
            store,
            navigator,
            renderer,
            edit_id,
            notices,
            pin_preview: false,
        }
    }

    /// Dispatch one gesture and run whatever side work it produces.
    pub async fn handle(&mut self, gesture: Gesture) {
        let event = match gesture {
            Gesture::EditTitle(title) => DraftEvent::TitleChanged(title),
            Gesture::EditContent(content) => DraftEvent::ContentChanged(content),
            Gesture::PickCategory(key) => DraftEvent::CategoryChanged(key),
            Gesture::PickSubCategory(key) => DraftEvent::SubCategoryChanged(key),
            Gesture::PickFiles(files) => DraftEvent::FilesSelected(files),
            Gesture::Paste(items) => DraftEvent::ImagePasted(items),
            Gesture::Submit => DraftEvent::SubmitRequested,
            Gesture::Back => DraftEvent::BackRequested,
        };

        self.pin_preview = matches!(event, DraftEvent::ContentChanged(_));

        if let Some(effect) = self.session.apply(event) {
            self.run_effect(effect).await;
        }
    }

    async fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::UploadFiles { files } => {
                // All files of one selection race concurrently; successes
                // fold back in selection order, failures are skipped.
                let outcomes = join_all(files.iter().map(|f| self.uploader.upload(f))).await;
                let mut accepted = Vec::new();
                for (file, outcome) in files.iter().zip(outcomes) {
                    match outcome {
                        Ok(image) => accepted.push(image),
                        Err(error) => {
                            tracing::warn!(file = %file.name, %error, "image upload failed");
                            self.notices.push(Notice::UploadFailed {
                                file: file.name.clone(),
                                error,
                            });
                        }
                    }
                }
                self.session.append_images(accepted);
            }
            Effect::UploadPasted { file } => match self.uploader.upload(&file).await {
                Ok(image) => self.session.append_images([image]),
                Err(error) => {
                    tracing::warn!(file = %file.name, %error, "pasted image upload failed");
                    self.notices.push(Notice::UploadFailed {
                        file: file.name.clone(),
                        error,
                    });
                }
            },
            Effect::Submit { mode, payload } => {
                let post = Post::from(payload);
                let result = match mode {
                    Mode::Create => self.store.create(&post).await,
                    Mode::Edit => match &self.edit_id {
                        Some(id) => self.store.update(id, &post).await,
                        None => Err(ScribeError::Submission {
                            reason: "edit session has no post id".into(),
                        }),
                    },
                };
                match result {
                    Ok(()) => self.notices.push(Notice::Saved { mode }),
                    Err(error) => {
                        tracing::warn!(%error, "submission failed, draft preserved");
                        self.notices.push(Notice::SubmissionFailed { error });
                    }
                }
            }
            Effect::NavigateBack => self.navigator.go_back(),
        }
    }

    /// The editing pane, reflecting the current draft and taxonomy.
    pub fn editor_pane(&self) -> EditorPane {
        let post = self.session.post().cloned().unwrap_or_default();
        let sub_category_options = self.taxonomy.sub_options(&post.category).to_vec();
        EditorPane {
            title: post.title,
            content: post.content,
            sub_select_enabled: !post.category.is_empty(),
            category: post.category,
            sub_category: post.sub_category,
            category_options: self.taxonomy.top_level_options().cloned().collect(),
            sub_category_options,
        }
    }

    /// The preview pane: rendered content plus the scroll policy for this
    /// render - pinned to the bottom right after the content was retyped.
    pub fn preview_pane(&self) -> PreviewPane<R::Node> {
        let post = self.session.post().cloned().unwrap_or_default();
        PreviewPane {
            title: post.title,
            nodes: self.renderer.render(&post.content),
            scroll: if self.pin_preview {
                PreviewScroll::PinToBottom
            } else {
                PreviewScroll::Preserve
            },
        }
    }

    /// Drain the accumulated feedback notices.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn session(&self) -> &DraftSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
