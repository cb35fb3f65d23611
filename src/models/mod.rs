use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    // Write-only: stored at creation, never read back or exposed.
    #[allow(dead_code)]
    #[serde(skip_serializing)]
    pub(crate) password: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl User {
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            is_active: self.is_active,
        }
    }
}

/// What callers get back for a user. Never carries the password.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Partial update for a user; `None` fields are left alone.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub likes: u64,
    pub published: bool,
}

impl Post {
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            likes: self.likes,
        }
    }

    pub(crate) fn matches_keyword(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostSummary {
    pub id: u32,
    pub title: String,
    pub likes: u64,
}

/// Optional filters for listing a user's posts, applied in field order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostQuery {
    pub published: Option<bool>,
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_posts: usize,
    pub total_likes: u64,
    pub average_likes_per_post: f64,
    pub most_popular_post: Option<PostSummary>,
}
