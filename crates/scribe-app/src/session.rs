//! Session bootstrap: resolve an optional route id into a draft and a mode.

use scribe_common::ScribeError;
use scribe_editor_core::{Mode, Post};

use crate::store::PostStore;

/// The resolved starting point of an editor session.
#[derive(Debug)]
pub struct SessionInit {
    pub post: Post,
    pub mode: Mode,
    /// Present when an id was supplied but could not be resolved. The
    /// session still starts, in create mode; this is for user-visible
    /// feedback, not control flow.
    pub fallback: Option<ScribeError>,
}

/// Resolve the session's starting draft.
///
/// No id: an empty draft in create mode. A resolvable id: the stored post
/// in edit mode. An unresolvable id (unknown, or the store failed): an
/// empty draft in create mode, with the failure carried in
/// [`SessionInit::fallback`].
pub async fn initialize<S: PostStore>(id: Option<&str>, store: &S) -> SessionInit {
    let Some(id) = id else {
        return SessionInit {
            post: Post::empty(),
            mode: Mode::Create,
            fallback: None,
        };
    };

    match store.load(id).await {
        Ok(Some(post)) => SessionInit {
            post,
            mode: Mode::Edit,
            fallback: None,
        },
        Ok(None) => {
            tracing::warn!(%id, "post not found, starting in create mode");
            SessionInit {
                post: Post::empty(),
                mode: Mode::Create,
                fallback: Some(ScribeError::PostResolution { id: id.to_owned() }),
            }
        }
        Err(error) => {
            tracing::warn!(%id, %error, "post load failed, starting in create mode");
            SessionInit {
                post: Post::empty(),
                mode: Mode::Create,
                fallback: Some(error),
            }
        }
    }
}

/// Extract the optional post id from a view's query string.
///
/// Accepts the query with or without its leading `?`; the value is
/// percent-decoded. An empty value counts as absent.
pub fn query_id(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == "id" && !value.is_empty()).then_some(value)
        })
        .map(|value| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_owned())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_absent_id_starts_create_mode() {
        let init = initialize(None, &MemoryStore::seeded()).await;
        assert_eq!(init.mode, Mode::Create);
        assert_eq!(init.post, Post::empty());
        assert!(init.fallback.is_none());
    }

    #[tokio::test]
    async fn test_resolvable_id_starts_edit_mode() {
        let init = initialize(Some("1"), &MemoryStore::seeded()).await;
        assert_eq!(init.mode, Mode::Edit);
        assert_eq!(init.post.title, "나는 1번이다");
    }

    #[tokio::test]
    async fn test_missing_id_falls_back_to_create_mode() {
        let fresh = initialize(None, &MemoryStore::seeded()).await;
        let fallen = initialize(Some("missing-id"), &MemoryStore::seeded()).await;

        assert_eq!(fallen.mode, fresh.mode);
        assert_eq!(fallen.post, fresh.post);
        assert!(matches!(
            fallen.fallback,
            Some(ScribeError::PostResolution { .. })
        ));
    }

    #[test]
    fn test_query_id_extraction() {
        assert_eq!(query_id("?id=1"), Some("1".into()));
        assert_eq!(query_id("id=1&tab=preview"), Some("1".into()));
        assert_eq!(query_id("?tab=preview"), None);
        assert_eq!(query_id("?id="), None);
        assert_eq!(query_id(""), None);
    }

    #[test]
    fn test_query_id_is_percent_decoded() {
        assert_eq!(query_id("?id=a%20b"), Some("a b".into()));
    }
}
