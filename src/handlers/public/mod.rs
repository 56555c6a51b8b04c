// handlers/public - Endpoints outside the bearer-token gate
pub mod health;

pub use health::{health, route_not_found};
