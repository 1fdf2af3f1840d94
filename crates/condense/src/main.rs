use anyhow::Result;
use clap::{Parser, Subcommand};
use condense_common::{logger, AppConfig};
use condense_llm::{ChatClient, SummarizeOptions, Summarizer, SummaryMode};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "condense")]
#[command(about = "Condense - LLM-powered text summarization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "8080")]
        port: u16,
    },

    /// Summarize a file (or stdin) and print the result
    Summarize {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Produce a bullet-point summary
        #[arg(long)]
        bullets: bool,

        /// Also write the summary to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // Override with CLI arguments before loading config
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            serve().await?;
        }
        Some(Commands::Summarize {
            file,
            bullets,
            output,
        }) => {
            let config = AppConfig::from_env()?;
            logger::setup_console_logging(&config.log_level)?;

            let text = match file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let mode = if bullets {
                SummaryMode::Bullets
            } else {
                SummaryMode::Standard
            };

            let client = ChatClient::from_config(&config)?;
            let summarizer = Summarizer::new(Arc::new(client), SummarizeOptions::from(&config));

            let summary = summarizer.summarize(&text, mode).await?;

            let compression = condense_server::compression_ratio(
                text.chars().count(),
                summary.chars().count(),
            );
            tracing::info!("Compression: {}% reduction in length", compression);

            if let Some(path) = output {
                std::fs::write(&path, &summary)?;
                tracing::info!("Summary written to {}", path.display());
            }

            println!("{}", summary);
        }
        None => {
            // Default: start server with env config
            serve().await?;
        }
    }

    Ok(())
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Condense starting...");
    tracing::info!("  Model: {}", config.model);
    tracing::info!("  Endpoint: {}", config.base_url);
    tracing::info!("  Threshold: {} chars, chunks {}/{}",
        config.short_threshold, config.chunk_size, config.chunk_overlap);

    println!("Server listening on http://{}", config.server_bind_address());

    condense_server::start_server(config).await?;

    Ok(())
}
