//! Scenario tests for the draft session.
//!
//! These exercise whole event sequences against the state machine, the way
//! the application layer drives it: apply an event, run the returned effect
//! by hand, fold results back in.

use bytes::Bytes;

use crate::events::{ClipboardItem, DraftEvent, Effect, FileBlob};
use crate::post::{ImageReference, Mode, Post};
use crate::session::DraftSession;

fn png(name: &str) -> FileBlob {
    FileBlob::new(name, "image/png", Bytes::from_static(b"\x89PNG\r\n"))
}

fn seeded_post() -> Post {
    Post {
        title: "나는 1번이다".into(),
        content: "나는 1번이다 이건 테스트임".into(),
        category: "study".into(),
        sub_category: "cs".into(),
    }
}

// === Upload folding ===

#[test]
fn test_upload_success_round_trip() {
    let mut session = DraftSession::ready(Post::empty(), Mode::Create);
    session.apply(DraftEvent::ContentChanged("before".into()));

    let effect = session.apply(DraftEvent::FilesSelected(vec![png("a.png")]));
    let Some(Effect::UploadFiles { files }) = effect else {
        panic!("selection must request an upload");
    };
    assert_eq!(files.len(), 1);

    // The adapter succeeded; fold the reference back in.
    session.append_images([ImageReference::new("https://x/", "a.png")]);
    assert_eq!(session.post().unwrap().content, "before\n![](https://x/a.png)");
}

#[test]
fn test_upload_failure_is_a_content_no_op() {
    let mut session = DraftSession::ready(Post::empty(), Mode::Create);
    session.apply(DraftEvent::ContentChanged("before".into()));
    session.apply(DraftEvent::FilesSelected(vec![png("a.png")]));

    // The adapter failed; nothing is folded back.
    session.append_images(std::iter::empty());
    assert_eq!(session.post().unwrap().content, "before");
}

#[test]
fn test_partial_failure_folds_survivors_in_selection_order() {
    let mut session = DraftSession::ready(Post::empty(), Mode::Create);
    session.apply(DraftEvent::FilesSelected(vec![
        png("a.png"),
        png("b.png"),
        png("c.png"),
    ]));

    // b.png failed to upload; a and c fold in selection order.
    session.append_images([
        ImageReference::new("https://x/", "a.png"),
        ImageReference::new("https://x/", "c.png"),
    ]);
    assert_eq!(
        session.post().unwrap().content,
        "![](https://x/a.png)\n![](https://x/c.png)"
    );
}

// === Paste handling ===

#[test]
fn test_paste_takes_first_image_item_regardless_of_position() {
    let mut session = DraftSession::ready(Post::empty(), Mode::Create);
    let effect = session.apply(DraftEvent::ImagePasted(vec![
        ClipboardItem::Text("alt text".into()),
        ClipboardItem::File(png("pasted.png")),
        ClipboardItem::File(png("ignored.png")),
    ]));

    let Some(Effect::UploadPasted { file }) = effect else {
        panic!("paste with an image must request an upload");
    };
    assert_eq!(file.name, "pasted.png");
}

#[test]
fn test_paste_without_image_is_inert() {
    let mut session = DraftSession::ready(Post::empty(), Mode::Create);
    let effect = session.apply(DraftEvent::ImagePasted(vec![ClipboardItem::Text(
        "plain".into(),
    )]));
    assert!(effect.is_none());
}

// === Edit-mode scenario ===

#[test]
fn test_edit_session_category_reselect_then_sub_change() {
    let mut session = DraftSession::ready(seeded_post(), Mode::Edit);

    session.apply(DraftEvent::CategoryChanged("study".into()));
    session.apply(DraftEvent::SubCategoryChanged("Algorithm".into()));

    let post = session.post().unwrap();
    assert_eq!(post.category, "study");
    assert_eq!(post.sub_category, "Algorithm");
    assert_eq!(post.title, "나는 1번이다");
    assert_eq!(post.content, "나는 1번이다 이건 테스트임");
    assert_eq!(session.mode(), Some(Mode::Edit));
}

#[test]
fn test_submission_never_blocks_further_edits() {
    let mut session = DraftSession::ready(seeded_post(), Mode::Edit);
    let submit = session.apply(DraftEvent::SubmitRequested);
    assert!(matches!(submit, Some(Effect::Submit { mode: Mode::Edit, .. })));

    // The store has not acknowledged anything yet; typing continues.
    session.apply(DraftEvent::TitleChanged("새 제목".into()));
    assert_eq!(session.post().unwrap().title, "새 제목");
}

#[test]
fn test_back_request_persists_nothing() {
    let mut session = DraftSession::ready(seeded_post(), Mode::Edit);
    session.apply(DraftEvent::TitleChanged("unsaved".into()));
    let effect = session.apply(DraftEvent::BackRequested);
    assert_eq!(effect, Some(Effect::NavigateBack));
    assert_eq!(session.post().unwrap().title, "unsaved");
}
