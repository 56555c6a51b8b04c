use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::PostRepository;
use crate::handlers::protected::posts;
use crate::handlers::public;
use crate::middleware::{jwt_auth_middleware, validate_request};
use crate::schemas::{CreatePostRequest, DeletePostRequest, UpdatePostRequest};
use crate::services::PostService;

/// Process-wide handles shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub posts: PostService,
}

impl AppState {
    pub fn new(config: AppConfig, repository: Arc<dyn PostRepository>) -> Self {
        Self {
            config: Arc::new(config),
            posts: PostService::new(repository),
        }
    }
}

/// Build the full HTTP surface
pub fn app(state: AppState) -> Router {
    let posts_path = format!("{}/posts", state.config.api.prefix.trim_end_matches('/'));

    Router::new()
        .route("/health", get(public::health))
        .nest(&posts_path, post_routes(&state))
        .fallback(public::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&state.config)),
        )
        .with_state(state)
}

/// auth gate → validation → controller
///
/// The gate wraps the whole subtree, its own fallback included, so unknown
/// paths and methods under `/posts` are refused with 401 before routing.
fn post_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(posts::list_posts).merge(post(posts::create_post).layer(from_fn_with_state(
                state.clone(),
                validate_request::<CreatePostRequest>,
            ))),
        )
        .route(
            "/:postId",
            put(posts::update_post)
                .layer(from_fn_with_state(
                    state.clone(),
                    validate_request::<UpdatePostRequest>,
                ))
                .merge(delete(posts::delete_post).layer(from_fn_with_state(
                    state.clone(),
                    validate_request::<DeletePostRequest>,
                ))),
        )
        .fallback(public::route_not_found)
        .layer(from_fn_with_state(state.clone(), jwt_auth_middleware))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    match HeaderValue::from_str(config.server.app_origin.trim_end_matches('/')) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                "APP_ORIGIN '{}' is not a valid header value; CORS disabled",
                config.server.app_origin
            );
            layer
        }
    }
}
