use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPost, User};

pub const SEED_USER_ID: &str = "1";

pub fn seed_user() -> User {
    User {
        id: SEED_USER_ID.to_string(),
        name: "Lorenzo Lucchesi".to_string(),
        email: "lorenzo.lucchesi@test.com".to_string(),
    }
}

pub fn first_post(user_id: &str) -> NewPost {
    NewPost {
        title: "Hello World".to_string(),
        content: "This is my first post!".to_string(),
        published: true,
        user_id: user_id.to_string(),
    }
}

/// Insert the seed user and its first post. Safe to run repeatedly.
pub async fn run(pool: &PgPool) -> Result<(), DatabaseError> {
    let user = seed_user();
    let post = first_post(&user.id);

    let inserted = sqlx::query(
        "INSERT INTO users (id, name, email) VALUES ($1, $2, $3) ON CONFLICT (id) DO NOTHING",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .execute(pool)
    .await?
    .rows_affected();

    sqlx::query(
        r#"
        INSERT INTO posts (title, content, published, user_id)
        SELECT $1, $2, $3, $4
        WHERE NOT EXISTS (SELECT 1 FROM posts WHERE user_id = $4)
        "#,
    )
    .bind(&post.title)
    .bind(&post.content)
    .bind(post.published)
    .bind(&post.user_id)
    .execute(pool)
    .await?;

    info!(user = %user.id, created = (inserted > 0), "Seeded database");
    Ok(())
}
