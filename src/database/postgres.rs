use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPost, Post, PostChanges};
use crate::database::repository::PostRepository;

const POST_COLUMNS: &str = "id, title, content, published, user_id";

/// [`PostRepository`] backed by the shared Postgres pool
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_many(&self) -> Result<Vec<Post>, DatabaseError> {
        let sql = format!("SELECT {} FROM posts", POST_COLUMNS);
        let posts = sqlx::query_as::<_, Post>(&sql).fetch_all(&self.pool).await?;
        Ok(posts)
    }

    async fn create(&self, post: NewPost) -> Result<Post, DatabaseError> {
        let sql = format!(
            "INSERT INTO posts (title, content, published, user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            POST_COLUMNS
        );
        let created = sqlx::query_as::<_, Post>(&sql)
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.published)
            .bind(&post.user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DatabaseError> {
        let sql = format!(
            "UPDATE posts SET title = $2, content = $3, published = $4 WHERE id = $1 RETURNING {}",
            POST_COLUMNS
        );
        sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.content)
            .bind(changes.published)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("post {}", id)))
    }

    async fn delete(&self, id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("post {}", id)));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
