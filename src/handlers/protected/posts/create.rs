use axum::extract::{Extension, State};

use crate::app::AppState;
use crate::database::Post;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::schemas::{CreatePostRequest, ValidatedRequest};

pub const CREATE_SUCCEEDED: &str = "Post created successfully.";
pub const CREATE_FAILED: &str = "Failed to create post.";

/// POST /posts - Create a post owned by the caller
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Extension(request): Extension<ValidatedRequest<CreatePostRequest>>,
) -> ApiResult<Post> {
    let post = state
        .posts
        .create(request, &auth_user)
        .await
        .map_err(|e| super::failure(&state, "create_post", CREATE_FAILED, e))?;

    tracing::info!(post_id = %post.id, user_id = %post.user_id, "Post created");
    Ok(ApiResponse::created(post).with_message(CREATE_SUCCEEDED))
}
