use async_trait::async_trait;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPost, Post, PostChanges};

/// Persistence port for posts.
///
/// Every method is a single store call. `update` and `delete` report an unknown
/// id as [`DatabaseError::NotFound`]; a missing owner surfaces as
/// [`DatabaseError::ConstraintViolation`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in the store's default order.
    async fn find_many(&self) -> Result<Vec<Post>, DatabaseError>;

    /// Insert and return the stored row, including its generated id.
    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError>;

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DatabaseError>;

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError>;

    /// Connectivity check for `/health`.
    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
