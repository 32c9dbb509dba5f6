//! CLI entry point for aes-portal

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aes-portal")]
#[command(version)]
#[command(about = "Content service for the AES portal site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List store content
    List {
        /// Type of content to list (posts, slugs, tags)
        #[arg(default_value = "posts")]
        r#type: String,
    },

    /// Show or set the persisted locale
    Locale {
        /// Locale code to switch to (omit to show the current locale)
        code: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "aes_portal=debug,info"
    } else {
        "aes_portal=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Serve { port, ip } => {
            let portal = aes_portal::Portal::new(&base_dir)?;
            let ip = ip.unwrap_or_else(|| portal.config.server.ip.clone());
            let port = port.unwrap_or(portal.config.server.port);

            tracing::info!("Starting server at http://{}:{}", ip, port);
            aes_portal::server::start(&portal, &ip, port).await?;
        }

        Commands::List { r#type } => {
            let portal = aes_portal::Portal::new(&base_dir)?;
            aes_portal::commands::list::run(&portal, &r#type)?;
        }

        Commands::Locale { code } => {
            let portal = aes_portal::Portal::new(&base_dir)?;
            aes_portal::commands::locale::run(&portal, code.as_deref())?;
        }

        Commands::Version => {
            println!("aes-portal version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
