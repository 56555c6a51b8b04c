use axum::extract::State;

use crate::app::AppState;
use crate::database::Post;
use crate::middleware::{ApiResponse, ApiResult};

pub const LIST_FAILED: &str = "Failed to get posts.";

/// GET /posts - List every post
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Vec<Post>> {
    let posts = state
        .posts
        .list_all()
        .await
        .map_err(|e| super::failure(&state, "list_posts", LIST_FAILED, e))?;

    Ok(ApiResponse::success(posts))
}
