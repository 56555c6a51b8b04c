// handlers/protected/posts - Post CRUD controllers (auth + validation run upstream)
//
// Each controller makes one service call and writes one envelope. Failures are
// logged here and reduced to the operation's fixed message.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::create_post;
pub use delete::delete_post;
pub use list::list_posts;
pub use update::update_post;

use crate::app::AppState;
use crate::database::DatabaseError;
use crate::error::ApiError;

pub const POST_NOT_FOUND: &str = "Post not found.";

/// Convert a service failure into the client-facing envelope.
///
/// Not-found is reported as 404 only when `POSTS_NOT_FOUND_AS_404` is set;
/// otherwise it shares the generic 500 path with every other failure.
pub(crate) fn failure(
    state: &AppState,
    operation: &'static str,
    message: &'static str,
    err: DatabaseError,
) -> ApiError {
    match err {
        DatabaseError::NotFound(what) if state.config.api.not_found_as_404 => {
            tracing::warn!(operation, "{} not found", what);
            ApiError::not_found(POST_NOT_FOUND)
        }
        err => {
            tracing::error!(operation, error = %err, "Post operation failed");
            ApiError::internal_server_error(message)
        }
    }
}
