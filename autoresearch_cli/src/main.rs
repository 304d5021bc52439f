mod commands;
mod display;

use anyhow::Result;
use autoresearch_client::{
    HttpBackend, InProcessBackend, Orchestrator, ResearchBackend, DEFAULT_BASE_URL,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// AutoResearch: search, analyse and chat about research papers
#[derive(Parser, Debug)]
#[command(name = "autoresearch", version, about, long_about = None)]
struct Cli {
    /// Base URL of the AutoResearch API server
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    server: String,

    /// Timeout for each API request, in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Use the built-in services instead of calling the server
    #[arg(long)]
    offline: bool,

    /// Directory where reports and papers are saved
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run a research session and print the results
    Research {
        /// Research topic
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,

        /// Save the Markdown report and every paper after the run
        #[arg(long)]
        save: bool,
    },
    /// Run a research session, then ask questions about it
    Chat {
        /// Research topic
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging();

    let timeout = Duration::from_secs(cli.timeout_secs);
    let backend: Arc<dyn ResearchBackend> = if cli.offline {
        tracing::info!("Using in-process backend");
        Arc::new(InProcessBackend::new())
    } else {
        tracing::info!(server = %cli.server, "Using HTTP backend");
        Arc::new(HttpBackend::new(cli.server.as_str(), timeout)?)
    };
    let orchestrator = Orchestrator::new(backend).with_request_timeout(timeout);

    match cli.command {
        Commands::Research { topic, save } => {
            let out = save.then_some(cli.out.as_path());
            commands::research(&orchestrator, &topic.join(" "), out).await
        }
        Commands::Chat { topic } => commands::chat(&orchestrator, &topic.join(" "), &cli.out).await,
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
