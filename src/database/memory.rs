use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPost, Post, PostChanges};
use crate::database::repository::PostRepository;
use crate::database::seed;

#[derive(Default)]
struct MemoryState {
    users: HashSet<String>,
    posts: Vec<Post>,
}

/// In-process [`PostRepository`] with the same failure signals as Postgres.
/// Posts are listed in insertion order.
#[derive(Default)]
pub struct MemoryPostRepository {
    state: RwLock<MemoryState>,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the seed user and its first post
    pub fn seeded() -> Self {
        let user = seed::seed_user();
        let post = Post::from_new(Uuid::new_v4(), seed::first_post(&user.id));
        Self {
            state: RwLock::new(MemoryState {
                users: HashSet::from([user.id]),
                posts: vec![post],
            }),
        }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn find_many(&self) -> Result<Vec<Post>, DatabaseError> {
        Ok(self.state.read().await.posts.clone())
    }

    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError> {
        let mut state = self.state.write().await;
        if !state.users.contains(&post.user_id) {
            return Err(DatabaseError::ConstraintViolation(
                "posts_user_id_fkey".to_string(),
            ));
        }

        let created = Post::from_new(Uuid::new_v4(), post);
        state.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DatabaseError> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DatabaseError::NotFound(format!("post {}", id)))?;
        post.apply(changes);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let mut state = self.state.write().await;
        let index = state
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DatabaseError::NotFound(format!("post {}", id)))?;
        state.posts.remove(index);
        Ok(())
    }
}
