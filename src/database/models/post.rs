use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub user_id: String,
}

/// Insert payload; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub user_id: String,
}

/// Mutable columns of an existing post. `id` and `user_id` never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub published: bool,
}

impl Post {
    pub fn from_new(id: Uuid, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            published: new.published,
            user_id: new.user_id,
        }
    }

    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.title;
        self.content = changes.content;
        self.published = changes.published;
    }
}
