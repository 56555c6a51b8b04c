use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Owner of posts. Created out of band by the seeder, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}
