use crate::prelude::*;
use async_trait::async_trait;
use postboard_core::types::{Comment, Post, User};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Read-only access to users, posts and comments
#[async_trait]
pub trait PostSource: Send + Sync {
    /// `GET /users`
    async fn users(&self) -> Result<Vec<User>, Error>;

    /// `GET /posts?userId=<id>`
    async fn user_posts(&self, user_id: u64) -> Result<Vec<Post>, Error>;

    /// `GET /users/<id>`
    async fn user(&self, user_id: u64) -> Result<User, Error>;

    /// `GET /comments?postId=<id>`
    async fn post_comments(&self, post_id: u64) -> Result<Vec<Comment>, Error>;
}

/// HTTP client for a JSONPlaceholder-style API
#[derive(Debug, Clone)]
pub struct JsonPlaceholder {
    client: reqwest::Client,
    base: String,
}

impl JsonPlaceholder {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to fetch {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Http {
                url,
                status: response.status().as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| Error::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl PostSource for JsonPlaceholder {
    async fn users(&self) -> Result<Vec<User>, Error> {
        self.get_json("/users").await
    }

    async fn user_posts(&self, user_id: u64) -> Result<Vec<Post>, Error> {
        self.get_json(&format!("/posts?userId={user_id}")).await
    }

    async fn user(&self, user_id: u64) -> Result<User, Error> {
        self.get_json(&format!("/users/{user_id}")).await
    }

    async fn post_comments(&self, post_id: u64) -> Result<Vec<Comment>, Error> {
        self.get_json(&format!("/comments?postId={post_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let api = JsonPlaceholder::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base(), "http://localhost:3000");
        assert_eq!(api.url("/users"), "http://localhost:3000/users");
    }

    #[test]
    fn test_default_base() {
        let api = JsonPlaceholder::new(DEFAULT_API_BASE, Duration::from_secs(1)).unwrap();
        assert_eq!(
            api.url("/comments?postId=3"),
            "https://jsonplaceholder.typicode.com/comments?postId=3"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Reserve a free port, then release it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = JsonPlaceholder::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let err = api.users().await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
