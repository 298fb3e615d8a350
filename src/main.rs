use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use rmcp::transport::stdio;

use weather_mcp_server::{ServerConfig, WeatherLookup, WeatherServer, logging, web};

/// MCP tool server exposing wttr.in weather lookups
#[derive(Debug, Parser)]
#[command(name = "weather-mcp-server", version, about)]
struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Force debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the MCP tool (stdio unless --http is given)
    Serve {
        /// Serve over HTTP instead of stdio
        #[arg(long)]
        http: bool,
        /// Port for HTTP mode, overrides the configured port
        #[arg(long, requires = "http")]
        port: Option<u16>,
    },
    /// Look up the weather for one location and print the JSON payload
    Weather {
        #[arg(long)]
        location: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load_from_path(cli.config.clone())?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init(&config.logging)?;

    tracing::debug!(
        "Using config from: {}",
        cli.config
            .clone()
            .or_else(ServerConfig::get_config_path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    );

    let lookup = WeatherLookup::new(&config.weather)?;

    match cli.command.unwrap_or(Command::Serve {
        http: false,
        port: None,
    }) {
        Command::Serve { http: false, .. } => {
            tracing::info!("Starting weather MCP server (stdio mode)");
            let service = WeatherServer::new(lookup)
                .serve(stdio())
                .await
                .context("Failed to start MCP stdio transport")?;
            service.waiting().await?;
        }
        Command::Serve { http: true, port } => {
            let port = port.unwrap_or(config.http.port);
            web::run(WeatherServer::new(lookup), &config.http.host, port).await?;
        }
        Command::Weather { location } => {
            match lookup.get_weather_info(&location).await {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
