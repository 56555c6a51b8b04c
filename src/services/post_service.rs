use std::sync::Arc;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPost, Post, PostChanges};
use crate::database::repository::PostRepository;
use crate::middleware::AuthUser;
use crate::schemas::{CreatePostRequest, DeletePostRequest, UpdatePostRequest, ValidatedRequest};

/// Mediates between validated requests and the post store.
///
/// Holds no entity state; every call is one repository call and failures are
/// returned unchanged.
#[derive(Clone)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_all(&self) -> Result<Vec<Post>, DatabaseError> {
        self.repository.find_many().await
    }

    /// Create a post owned by the authenticated principal
    pub async fn create(
        &self,
        request: ValidatedRequest<CreatePostRequest>,
        owner: &AuthUser,
    ) -> Result<Post, DatabaseError> {
        let body = request.body;
        self.repository
            .create(NewPost {
                title: body.title,
                content: body.content,
                published: body.published,
                user_id: owner.user_id.clone(),
            })
            .await
    }

    pub async fn update_by_id(
        &self,
        request: ValidatedRequest<UpdatePostRequest>,
    ) -> Result<Post, DatabaseError> {
        let body = request.body;
        self.repository
            .update(
                request.params.post_id,
                PostChanges {
                    title: body.title,
                    content: body.content,
                    published: body.published,
                },
            )
            .await
    }

    pub async fn delete_by_id(
        &self,
        request: ValidatedRequest<DeletePostRequest>,
    ) -> Result<(), DatabaseError> {
        self.repository.delete(request.params.post_id).await
    }

    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        self.repository.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{seed, MemoryPostRepository};
    use crate::schemas::{PostBody, PostIdParams};
    use uuid::Uuid;

    fn service() -> PostService {
        PostService::new(Arc::new(MemoryPostRepository::seeded()))
    }

    fn owner(id: &str) -> AuthUser {
        AuthUser {
            user_id: id.into(),
            name: "Owner".into(),
            email: "owner@example.com".into(),
        }
    }

    fn body(published: bool) -> PostBody {
        PostBody {
            title: "Title".into(),
            content: "Content".into(),
            published,
        }
    }

    #[tokio::test]
    async fn create_stamps_owner_from_principal() {
        let service = service();
        let post = service
            .create(ValidatedRequest::new((), body(true)), &owner(seed::SEED_USER_ID))
            .await
            .unwrap();
        assert_eq!(post.user_id, seed::SEED_USER_ID);
        assert!(post.published);
    }

    #[tokio::test]
    async fn create_for_unknown_owner_fails() {
        let result = service()
            .create(ValidatedRequest::new((), body(false)), &owner("nobody"))
            .await;
        assert!(matches!(result, Err(DatabaseError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn update_and_delete_propagate_not_found() {
        let service = service();
        let params = PostIdParams {
            post_id: Uuid::new_v4(),
        };
        assert!(matches!(
            service
                .update_by_id(ValidatedRequest::new(params, body(false)))
                .await,
            Err(DatabaseError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_by_id(ValidatedRequest::new(params, ())).await,
            Err(DatabaseError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_replaces_mutable_fields() {
        let service = service();
        let existing = service.list_all().await.unwrap().remove(0);
        let params = PostIdParams {
            post_id: existing.id,
        };
        let updated = service
            .update_by_id(ValidatedRequest::new(params, body(false)))
            .await
            .unwrap();
        assert_eq!(updated.title, "Title");
        assert!(!updated.published);
        assert_eq!(updated.user_id, existing.user_id);
    }
}
