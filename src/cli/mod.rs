pub mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "post-api")]
#[command(about = "Post API server and maintenance commands")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Use the in-process store instead of Postgres")]
        memory: bool,
    },

    #[command(about = "Apply database migrations")]
    Migrate,

    #[command(about = "Insert the seed user and its first post")]
    Seed,

    #[command(about = "Print a signed bearer token for a user")]
    Token {
        #[arg(help = "User id to place in the token subject")]
        user_id: String,
        #[arg(long, default_value = "", help = "Display name claim")]
        name: String,
        #[arg(long, default_value = "", help = "Email claim")]
        email: String,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!("Starting Post API in {:?} mode", config.environment);

    match cli.command.unwrap_or(Commands::Serve { memory: false }) {
        Commands::Serve { memory } => commands::serve::handle(config, memory).await,
        Commands::Migrate => commands::seed::migrate(config).await,
        Commands::Seed => commands::seed::seed_database(config).await,
        Commands::Token {
            user_id,
            name,
            email,
        } => commands::token::handle(&config, user_id, name, email),
    }
}
