// handlers/protected - Endpoints behind the bearer-token gate
pub mod posts;
