//! The draft session state machine.
//!
//! `DraftSession` exclusively owns the in-progress `Post` and the session
//! `Mode`. It starts in `Bootstrapping` while the initial post is resolved
//! and spends the rest of its life in `Ready`; there is no blocking "saving"
//! state, submission is fire-and-forget from the machine's point of view.
//!
//! `apply` is synchronous and never awaits: anything that would suspend
//! (uploads, persistence, navigation) comes back as an [`Effect`] for the
//! caller to run. That keeps the session responsive while uploads are
//! outstanding - further events may be applied before a pending upload
//! resolves, and completions are folded in later via [`DraftSession::append_images`].

use smol_str::SmolStr;

use crate::events::{DraftEvent, Effect, first_image_item};
use crate::post::{ImageReference, Mode, Post};

/// Observable session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The initial post (if any) is still being resolved.
    Bootstrapping,
    /// The terminal operating state for the rest of the session.
    Ready,
}

#[derive(Debug, Clone)]
enum Phase {
    Bootstrapping,
    Ready { post: Post, mode: Mode },
}

/// The editor session state machine.
#[derive(Debug, Clone)]
pub struct DraftSession {
    phase: Phase,
}

impl DraftSession {
    /// A session awaiting its initial post.
    pub fn bootstrapping() -> Self {
        Self {
            phase: Phase::Bootstrapping,
        }
    }

    /// A session that is immediately `Ready`.
    pub fn ready(post: Post, mode: Mode) -> Self {
        Self {
            phase: Phase::Ready { post, mode },
        }
    }

    /// Transition from `Bootstrapping` to `Ready` with the resolved draft.
    ///
    /// A second resolution is ignored; the mode is fixed for the session.
    pub fn resolve(&mut self, post: Post, mode: Mode) {
        match self.phase {
            Phase::Bootstrapping => self.phase = Phase::Ready { post, mode },
            Phase::Ready { .. } => {
                tracing::warn!("session already resolved, ignoring second bootstrap");
            }
        }
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Bootstrapping => SessionState::Bootstrapping,
            Phase::Ready { .. } => SessionState::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == SessionState::Ready
    }

    /// The draft, once the session is ready.
    pub fn post(&self) -> Option<&Post> {
        match &self.phase {
            Phase::Bootstrapping => None,
            Phase::Ready { post, .. } => Some(post),
        }
    }

    /// The session mode, once the session is ready.
    pub fn mode(&self) -> Option<Mode> {
        match self.phase {
            Phase::Bootstrapping => None,
            Phase::Ready { mode, .. } => Some(mode),
        }
    }

    /// Apply one input event, returning the side request it produces, if any.
    ///
    /// Events arriving while still `Bootstrapping` are dropped; the machine
    /// stays consistent and the caller may retry after resolution.
    pub fn apply(&mut self, event: DraftEvent) -> Option<Effect> {
        let Phase::Ready { post, mode } = &mut self.phase else {
            tracing::warn!(?event, "event dropped while bootstrapping");
            return None;
        };

        match event {
            DraftEvent::TitleChanged(title) => {
                post.title = title;
                None
            }
            DraftEvent::ContentChanged(content) => {
                post.content = content;
                None
            }
            DraftEvent::CategoryChanged(key) => {
                // Selecting a top-level category invalidates any previously
                // chosen child, even when re-selecting the same category.
                post.category = key;
                post.sub_category = SmolStr::default();
                None
            }
            DraftEvent::SubCategoryChanged(key) => {
                if post.category.is_empty() {
                    tracing::debug!(%key, "sub-category change dropped: no category selected");
                } else {
                    post.sub_category = key;
                }
                None
            }
            DraftEvent::FilesSelected(files) => {
                if files.is_empty() {
                    None
                } else {
                    Some(Effect::UploadFiles { files })
                }
            }
            DraftEvent::ImagePasted(items) => first_image_item(&items)
                .cloned()
                .map(|file| Effect::UploadPasted { file }),
            DraftEvent::SubmitRequested => Some(Effect::Submit {
                mode: *mode,
                payload: post.payload(),
            }),
            DraftEvent::BackRequested => Some(Effect::NavigateBack),
        }
    }

    /// Fold resolved uploads into the content, in the order given.
    ///
    /// Each reference appends its markdown tag, newline-separated from
    /// whatever precedes it. Failed uploads contribute nothing and must not
    /// be passed here.
    pub fn append_images<I>(&mut self, images: I)
    where
        I: IntoIterator<Item = ImageReference>,
    {
        let Phase::Ready { post, .. } = &mut self.phase else {
            tracing::warn!("upload results dropped while bootstrapping");
            return;
        };
        for image in images {
            post.append_image_tag(&image);
        }
    }
}
