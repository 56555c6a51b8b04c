use axum::extract::{Extension, State};

use crate::app::AppState;
use crate::database::Post;
use crate::middleware::{ApiResponse, ApiResult};
use crate::schemas::{UpdatePostRequest, ValidatedRequest};

pub const UPDATE_SUCCEEDED: &str = "Post updated successfully.";
pub const UPDATE_FAILED: &str = "Failed to update post.";

/// PUT /posts/:postId - Replace title, content and published
pub async fn update_post(
    State(state): State<AppState>,
    Extension(request): Extension<ValidatedRequest<UpdatePostRequest>>,
) -> ApiResult<Post> {
    let post = state
        .posts
        .update_by_id(request)
        .await
        .map_err(|e| super::failure(&state, "update_post", UPDATE_FAILED, e))?;

    Ok(ApiResponse::success(post).with_message(UPDATE_SUCCEEDED))
}
