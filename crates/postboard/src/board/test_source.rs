//! In-memory [`PostSource`] for board tests

use crate::api::PostSource;
use crate::prelude::*;
use async_trait::async_trait;
use postboard_core::types::{Comment, Company, Post, User};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct StaticSource {
    pub users: Vec<User>,
    pub posts: HashMap<u64, Vec<Post>>,
    pub comments: HashMap<u64, Vec<Comment>>,
    /// User ids whose `/users/<id>` lookup fails
    pub failing_users: HashSet<u64>,
    /// User ids whose post listing fails
    pub failing_posts: HashSet<u64>,
    /// Post ids whose comment listing fails
    pub failing_comments: HashSet<u64>,
    /// Delay applied to the post listing of a user
    pub post_delays: HashMap<u64, Duration>,
    /// Delay applied to the comment listing of a post
    pub comment_delays: HashMap<u64, Duration>,
    pub calls: Mutex<Vec<String>>,
}

pub fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: None,
        email: None,
        company: Company {
            name: format!("{name} Corp"),
            catch_phrase: format!("{name} says hi"),
        },
    }
}

pub fn post(id: u64, user_id: u64) -> Post {
    Post {
        id,
        user_id,
        title: format!("Post {id}"),
        body: format!("Body of post {id}"),
    }
}

pub fn comment(post_id: u64, name: &str) -> Comment {
    Comment {
        id: None,
        post_id,
        name: name.to_string(),
        body: format!("{name} wrote this"),
        email: format!("{name}@example.com"),
    }
}

impl StaticSource {
    /// Two users: user 1 wrote posts 1 and 2, user 2 wrote post 3
    pub fn fixture() -> Self {
        let mut source = StaticSource {
            users: vec![user(1, "Leanne"), user(2, "Ervin")],
            ..Default::default()
        };
        source.posts.insert(1, vec![post(1, 1), post(2, 1)]);
        source.posts.insert(2, vec![post(3, 2)]);
        source
            .comments
            .insert(1, vec![comment(1, "alice"), comment(1, "bob")]);
        source.comments.insert(3, vec![comment(3, "carol")]);
        source
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn not_found(path: String) -> Error {
        Error::Http {
            url: path,
            status: 404,
        }
    }
}

#[async_trait]
impl PostSource for StaticSource {
    async fn users(&self) -> Result<Vec<User>, Error> {
        self.record("users".to_string());
        Ok(self.users.clone())
    }

    async fn user_posts(&self, user_id: u64) -> Result<Vec<Post>, Error> {
        self.record(format!("posts:{user_id}"));
        if let Some(delay) = self.post_delays.get(&user_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_posts.contains(&user_id) {
            return Err(Error::Http {
                url: format!("/posts?userId={user_id}"),
                status: 500,
            });
        }
        Ok(self.posts.get(&user_id).cloned().unwrap_or_default())
    }

    async fn user(&self, user_id: u64) -> Result<User, Error> {
        self.record(format!("user:{user_id}"));
        if self.failing_users.contains(&user_id) {
            return Err(Error::Network(format!("user {user_id} unreachable")));
        }
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/users/{user_id}")))
    }

    async fn post_comments(&self, post_id: u64) -> Result<Vec<Comment>, Error> {
        self.record(format!("comments:{post_id}"));
        if let Some(delay) = self.comment_delays.get(&post_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_comments.contains(&post_id) {
            return Err(Error::Http {
                url: format!("/comments?postId={post_id}"),
                status: 500,
            });
        }
        Ok(self.comments.get(&post_id).cloned().unwrap_or_default())
    }
}
