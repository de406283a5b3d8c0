use anyhow::Result;
use clap::{Parser, Subcommand};

/// vibedoctor - Provision your infra at the speed of chat
#[derive(Parser)]
#[command(name = "vibedoctor")]
#[command(about = "VibeDoctor marketing site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit a url to IndexNow through the running site
    Indexnow {
        /// Absolute url of the page to submit
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = vibedoctor::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    vibedoctor::observability::init_observability(
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.app.is_production(),
    )?;

    match cli.command {
        Commands::Serve { host, port } => vibedoctor::cli::serve(config, host, port).await,
        Commands::Indexnow { url } => vibedoctor::cli::indexnow(config, url).await,
    }
}
