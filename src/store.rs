//! In-memory user and post store.
//!
//! Both collections are plain `Vec`s scanned linearly. Ids are assigned as
//! `len + 1`, so an id can be handed out again after a delete; lookups return
//! the first match in insertion order.

use chrono::Utc;
use log::{debug, info, warn};

use crate::config::Limits;
use crate::error::{StoreError, StoreResult, ValidationError};
use crate::models::{Post, PostQuery, PostSummary, User, UserStats, UserUpdate, UserView};

#[derive(Debug, Default)]
pub struct Store {
    users: Vec<User>,
    posts: Vec<Post>,
    limits: Limits,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Drops every user and post. Limits are kept.
    pub fn reset(&mut self) {
        self.users.clear();
        self.posts.clear();
    }

    pub fn users(&self) -> Vec<UserView> {
        self.users.iter().map(User::view).collect()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get_user_by_id(&self, id: u32) -> Option<UserView> {
        let user = self.find_user(id).map(User::view);
        if user.is_none() {
            debug!("User {} not found", id);
        }
        user
    }

    pub fn create_user(&mut self, name: &str, email: &str, password: &str) -> StoreResult<UserView> {
        self.validate_user(name, email, password).inspect_err(|e| {
            warn!("Rejected new user: {}", e);
        })?;

        let user = User {
            id: self.users.len() as u32 + 1,
            name: name.to_string(),
            email: email.to_string(),
            password: obscure_password(password),
            created_at: Utc::now(),
            is_active: true,
        };
        info!("Created user {} ({})", user.id, user.email);
        let view = user.view();
        self.users.push(user);
        Ok(view)
    }

    pub fn update_user(&mut self, id: u32, updates: UserUpdate) -> Option<UserView> {
        let Some(user) = self.users.iter_mut().find(|u| u.id == id) else {
            debug!("Update skipped, user {} not found", id);
            return None;
        };

        if let Some(name) = updates.name {
            user.name = name;
        }
        if let Some(email) = updates.email {
            user.email = email;
        }
        if let Some(is_active) = updates.is_active {
            user.is_active = is_active;
        }
        info!("Updated user {}", id);
        Some(user.view())
    }

    /// Removes the user and every post it owns. Returns `false` if no user matched.
    pub fn delete_user(&mut self, id: u32) -> bool {
        let Some(index) = self.users.iter().position(|u| u.id == id) else {
            debug!("Delete skipped, user {} not found", id);
            return false;
        };
        self.users.remove(index);

        let before = self.posts.len();
        self.posts.retain(|p| p.user_id != id);
        info!("Deleted user {} and {} of its posts", id, before - self.posts.len());
        true
    }

    pub fn create_post(
        &mut self,
        user_id: u32,
        title: &str,
        content: &str,
        tags: Vec<String>,
    ) -> StoreResult<Post> {
        if self.find_user(user_id).is_none() {
            warn!("Rejected post for unknown user {}", user_id);
            return Err(StoreError::UserNotFound { user_id });
        }
        self.validate_post(title, content).inspect_err(|e| {
            warn!("Rejected post from user {}: {}", user_id, e);
        })?;

        let post = Post {
            id: self.posts.len() as u32 + 1,
            user_id,
            title: title.to_string(),
            content: content.to_string(),
            tags,
            created_at: Utc::now(),
            likes: 0,
            published: true,
        };
        info!("User {} created post {}: {}", user_id, post.id, post.title);
        self.posts.push(post.clone());
        Ok(post)
    }

    pub fn get_user_posts(&self, user_id: u32, query: &PostQuery) -> Vec<Post> {
        let posts = self
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .filter(|p| query.published.is_none_or(|published| p.published == published))
            .filter(|p| query.tag.as_ref().is_none_or(|tag| p.tags.contains(tag)))
            .cloned();

        match query.limit {
            Some(limit) => posts.take(limit).collect(),
            None => posts.collect(),
        }
    }

    /// Case-insensitive substring search over title, content and tags.
    /// Results keep insertion order.
    pub fn search_posts(&self, keyword: &str, max_results: Option<usize>) -> StoreResult<Vec<Post>> {
        if keyword.chars().count() < self.limits.min_keyword_len {
            return Err(ValidationError::new(
                "keyword",
                format!("must be at least {} characters", self.limits.min_keyword_len),
            )
            .into());
        }

        let needle = keyword.to_lowercase();
        let max_results = max_results.unwrap_or(self.limits.default_search_results);
        let results: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.matches_keyword(&needle))
            .take(max_results)
            .cloned()
            .collect();
        debug!("Search for {:?} matched {} posts", keyword, results.len());
        Ok(results)
    }

    pub fn like_post(&mut self, post_id: u32) -> Option<PostSummary> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            debug!("Like skipped, post {} not found", post_id);
            return None;
        };
        post.likes += 1;
        Some(post.summary())
    }

    pub fn get_user_stats(&self, user_id: u32) -> StoreResult<UserStats> {
        if self.find_user(user_id).is_none() {
            return Err(StoreError::UserNotFound { user_id });
        }

        let mut total_posts = 0;
        let mut total_likes = 0;
        let mut most_popular: Option<&Post> = None;
        for post in self.posts.iter().filter(|p| p.user_id == user_id) {
            total_posts += 1;
            total_likes += post.likes;
            // Strict comparison keeps the first post on ties.
            if most_popular.is_none_or(|best| post.likes > best.likes) {
                most_popular = Some(post);
            }
        }

        let average_likes_per_post = if total_posts == 0 {
            0.0
        } else {
            round_to_cents(total_likes as f64 / total_posts as f64)
        };

        Ok(UserStats {
            total_posts,
            total_likes,
            average_likes_per_post,
            most_popular_post: most_popular.map(Post::summary),
        })
    }

    fn find_user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn validate_user(&self, name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
        if name.chars().count() < self.limits.min_name_len {
            return Err(ValidationError::new(
                "name",
                format!("must be at least {} characters", self.limits.min_name_len),
            ));
        }
        if !email.contains('@') {
            return Err(ValidationError::new("email", "must contain '@'"));
        }
        if password.chars().count() < self.limits.min_password_len {
            return Err(ValidationError::new(
                "password",
                format!("must be at least {} characters", self.limits.min_password_len),
            ));
        }
        Ok(())
    }

    fn validate_post(&self, title: &str, content: &str) -> Result<(), ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::new("title", "is required"));
        }
        if title.chars().count() > self.limits.max_title_len {
            return Err(ValidationError::new(
                "title",
                format!("must be at most {} characters", self.limits.max_title_len),
            ));
        }
        if content.is_empty() {
            return Err(ValidationError::new("content", "is required"));
        }
        if content.chars().count() > self.limits.max_content_len {
            return Err(ValidationError::new(
                "content",
                format!("must be at most {} characters", self.limits.max_content_len),
            ));
        }
        Ok(())
    }
}

/// Placeholder transform, not a hash.
fn obscure_password(password: &str) -> String {
    format!("hashed_{}", password.chars().rev().collect::<String>())
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
