// CLI binary is only available with the native feature
#![cfg(feature = "native")]

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use module_catalog::{McpServer, ModuleCatalog, Recommender, ServerConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "module-catalog")]
#[command(version, about = "MCP server for searching and recommending Modsynth modules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Server configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server on stdio (default)
    Serve,

    /// Search modules by keyword, category, or tech stack
    Search {
        /// Search query
        query: String,
    },

    /// Recommend modules for a use case
    Recommend {
        /// Use case description
        use_case: String,
    },

    /// List the MCP tools exposed by the server
    Tools,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    // stdout carries protocol frames; logs go to stderr
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("module-catalog v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => McpServer::with_config(config).run_stdio()?,
        Commands::Search { query } => cmd_search(&query)?,
        Commands::Recommend { use_case } => cmd_recommend(&use_case)?,
        Commands::Tools => cmd_tools(&McpServer::with_config(config)),
    }

    Ok(())
}

fn cmd_search(query: &str) -> anyhow::Result<()> {
    let results = ModuleCatalog::global().search(query)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn cmd_recommend(use_case: &str) -> anyhow::Result<()> {
    let recommendation = Recommender::new(ModuleCatalog::global()).recommend(use_case)?;
    println!("{}", serde_json::to_string_pretty(&recommendation)?);
    Ok(())
}

fn cmd_tools(server: &McpServer) {
    let config = server.config();
    println!(
        "{} {}",
        config.server_name.bright_cyan().bold(),
        config.server_version.dimmed()
    );
    for tool in server.tool_definitions() {
        println!("  {} - {}", tool.name.bright_green(), tool.description);
        for param in &tool.input_schema.required {
            println!("      {} (string, required)", param.yellow());
        }
    }
}
