//! The post store boundary.
//!
//! Three async operations: `load`, `create`, `update`. The transport is not
//! part of the contract; this module ships an in-memory store (seeded for
//! development and tests) and a JSON-over-HTTP store against the configured
//! endpoint.

use std::collections::HashMap;
use std::future::Future;

use reqwest::{Method, StatusCode};
use smol_str::SmolStr;
use tokio::sync::RwLock;

use scribe_common::{HttpClient, ScribeError};
use scribe_editor_core::Post;

/// Boundary trait for post persistence.
pub trait PostStore {
    /// Resolve an id to a post, `None` when the id is unknown.
    fn load(&self, id: &str) -> impl Future<Output = Result<Option<Post>, ScribeError>> + Send;

    /// Persist a new post.
    fn create(&self, post: &Post) -> impl Future<Output = Result<(), ScribeError>> + Send;

    /// Replace an existing post.
    fn update(&self, id: &str, post: &Post)
    -> impl Future<Output = Result<(), ScribeError>> + Send;
}

/// In-memory store keyed by numeric string ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<HashMap<SmolStr, Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the sample posts from [`crate::data`].
    pub fn seeded() -> Self {
        Self {
            posts: RwLock::new(crate::data::seed_posts().into_iter().collect()),
        }
    }

    pub async fn get(&self, id: &str) -> Option<Post> {
        self.posts.read().await.get(id).cloned()
    }
}

impl PostStore for MemoryStore {
    async fn load(&self, id: &str) -> Result<Option<Post>, ScribeError> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn create(&self, post: &Post) -> Result<(), ScribeError> {
        let mut posts = self.posts.write().await;
        let next = posts
            .keys()
            .filter_map(|k| k.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        posts.insert(SmolStr::from(next.to_string()), post.clone());
        Ok(())
    }

    async fn update(&self, id: &str, post: &Post) -> Result<(), ScribeError> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(())
            }
            None => Err(ScribeError::Submission {
                reason: format!("no post with id {id:?}"),
            }),
        }
    }
}

/// JSON-over-HTTP store against the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: HttpClient,
}

impl HttpStore {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl PostStore for HttpStore {
    async fn load(&self, id: &str) -> Result<Option<Post>, ScribeError> {
        let response = self
            .client
            .request(Method::GET, &format!("posts/{id}"))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(Some(response.json().await?))
    }

    async fn create(&self, post: &Post) -> Result<(), ScribeError> {
        let response = self
            .client
            .request(Method::POST, "posts")
            .json(post)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ScribeError::Submission {
                reason: format!("create rejected with status {}", response.status()),
            });
        }
        Ok(())
    }

    async fn update(&self, id: &str, post: &Post) -> Result<(), ScribeError> {
        let response = self
            .client
            .request(Method::PUT, &format!("posts/{id}"))
            .json(post)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ScribeError::Submission {
                reason: format!("update rejected with status {}", response.status()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_resolves_sample_posts() {
        let store = MemoryStore::seeded();
        let post = store.load("1").await.unwrap().unwrap();
        assert_eq!(post.category, "study");
        assert!(store.load("missing-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_the_next_id() {
        let store = MemoryStore::seeded();
        store
            .create(&Post {
                title: "third".into(),
                ..Post::empty()
            })
            .await
            .unwrap();
        assert_eq!(store.get("3").await.unwrap().title, "third");
    }

    #[tokio::test]
    async fn test_update_of_unknown_id_is_rejected() {
        let store = MemoryStore::new();
        let result = store.update("9", &Post::empty()).await;
        assert!(matches!(result, Err(ScribeError::Submission { .. })));
    }
}
