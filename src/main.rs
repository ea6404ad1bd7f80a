//! CLI entry point for blogpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogpress")]
#[command(version)]
#[command(about = "Build a static blog from posts stored in Supabase", long_about = None)]
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
    /// Fetch posts and generate the site
    #[command(alias = "b")]
    Build,

    /// Serve the output directory locally
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Build the site before serving
        #[arg(short, long)]
        build: bool,
    },

    /// Remove the output directory and the post cache
    Clean,

    /// List posts from the content API
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogpress=debug,info"
    } else {
        "blogpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Build => {
            let site = blogpress::Site::new(&base_dir)?;
            site.build().await?;
        }

        Commands::Server { port, ip, build } => {
            let site = blogpress::Site::new(&base_dir)?;
            if build {
                site.build().await?;
            }

            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogpress::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = blogpress::Site::new(&base_dir)?;
            tracing::info!("Cleaning output folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let site = blogpress::Site::new(&base_dir)?;
            blogpress::commands::list::run(&site).await?;
        }

        Commands::Version => {
            println!("blogpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
