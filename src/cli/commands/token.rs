use crate::auth::{generate_jwt, Claims};
use crate::config::AppConfig;

pub fn handle(config: &AppConfig, user_id: String, name: String, email: String) -> anyhow::Result<()> {
    let claims = Claims::new(user_id, name, email, config.security.jwt_expiry_hours);
    let token = generate_jwt(&claims, &config.security.jwt_secret)?;
    println!("{}", token);
    Ok(())
}
