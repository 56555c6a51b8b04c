#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

use post_api::auth::{generate_jwt, Claims};
use post_api::config::AppConfig;
use post_api::database::{
    seed, DatabaseError, MemoryPostRepository, NewPost, Post, PostChanges, PostRepository,
};
use post_api::{app, AppState};

pub const SECRET: &str = "integration-test-secret";

/// Memory store that counts how often it is called
#[derive(Default)]
pub struct CountingRepository {
    inner: MemoryPostRepository,
    calls: AtomicUsize,
}

impl CountingRepository {
    pub fn seeded() -> Self {
        Self {
            inner: MemoryPostRepository::seeded(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl PostRepository for CountingRepository {
    async fn find_many(&self) -> Result<Vec<Post>, DatabaseError> {
        self.hit();
        self.inner.find_many().await
    }

    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError> {
        self.hit();
        self.inner.create(post).await
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DatabaseError> {
        self.hit();
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        self.hit();
        self.inner.delete(id).await
    }
}

pub struct TestServer {
    pub base_url: String,
    pub token: String,
    pub repository: Arc<CountingRepository>,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    pub fn post_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/api/posts/{}", self.base_url, id)
    }

    /// Request builder carrying the seed user's bearer token
    pub fn authed(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        self.client.request(method, url).bearer_auth(&self.token)
    }
}

pub fn test_config(extra: &[(&str, &str)]) -> Result<AppConfig> {
    let mut vars = vec![
        ("APP_ORIGIN", "http://localhost:5173"),
        ("API_URL", "http://localhost:3000"),
        ("JWT_SECRET", SECRET),
    ];
    vars.extend_from_slice(extra);
    let vars: Vec<(String, String)> = vars
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
    .context("test configuration rejected")
}

pub fn token_for(user_id: &str) -> Result<String> {
    let claims = Claims::new(
        user_id.to_string(),
        "Test User".to_string(),
        "test@example.com".to_string(),
        1,
    );
    Ok(generate_jwt(&claims, SECRET)?)
}

/// Start an isolated server on a free port backed by a fresh seeded store
pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(&[]).await
}

pub async fn spawn_server_with(extra_env: &[(&str, &str)]) -> Result<TestServer> {
    let config = test_config(extra_env)?;
    let repository = Arc::new(CountingRepository::seeded());
    let router = app(AppState::new(config, repository.clone()));

    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        token: token_for(seed::SEED_USER_ID)?,
        repository,
        client: reqwest::Client::new(),
    })
}
