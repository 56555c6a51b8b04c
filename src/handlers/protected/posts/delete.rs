use axum::extract::{Extension, State};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::schemas::{DeletePostRequest, ValidatedRequest};

pub const DELETE_SUCCEEDED: &str = "Post deleted successfully.";
pub const DELETE_FAILED: &str = "Failed to delete post.";

/// DELETE /posts/:postId
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(request): Extension<ValidatedRequest<DeletePostRequest>>,
) -> ApiResult<()> {
    let post_id = request.params.post_id;
    state
        .posts
        .delete_by_id(request)
        .await
        .map_err(|e| super::failure(&state, "delete_post", DELETE_FAILED, e))?;

    tracing::info!(%post_id, "Post deleted");
    Ok(ApiResponse::message_only(DELETE_SUCCEEDED))
}
