//! `duelctl`: drive the duel engine from a terminal.
mod config;
mod demo;
mod render;
mod setup;

use anyhow::Result;
use clap::Parser;
use config::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let content = setup::load_content(cli.data.as_deref())?;

    match cli.command {
        Command::Characters => {
            for character in &content.characters {
                println!("{}", render::catalog_entry(character));
            }
            Ok(())
        }
        Command::Demo(args) => {
            let table = setup::build_engine(content)?;
            demo::run(&args, table).await
        }
    }
}
