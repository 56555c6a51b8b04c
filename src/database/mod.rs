pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod seed;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryPostRepository;
pub use models::{NewPost, Post, PostChanges, User};
pub use postgres::PgPostRepository;
pub use repository::PostRepository;
