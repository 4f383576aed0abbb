//! CLI entry point for headless-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "headless-blog")]
#[command(version)]
#[command(about = "Render a blog from a headless CMS", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Configuration file (defaults to _config.yml in the base directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the list page
    #[command(alias = "i")]
    Index {
        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the page of a single post
    #[command(alias = "p")]
    Post {
        /// Identifier of the post
        id: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List published posts
    List,

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout may carry a rendered page, so log to stderr
    let filter = if cli.debug {
        "headless_blog=debug,info"
    } else {
        "headless_blog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Index { output } => {
            let blog = headless_blog::Blog::new(&base_dir, cli.config.as_deref())?;
            headless_blog::commands::render::index(&blog, output.as_deref()).await?;
        }

        Commands::Post { id, output } => {
            let blog = headless_blog::Blog::new(&base_dir, cli.config.as_deref())?;
            headless_blog::commands::render::post(&blog, &id, output.as_deref()).await?;
        }

        Commands::List => {
            let blog = headless_blog::Blog::new(&base_dir, cli.config.as_deref())?;
            headless_blog::commands::list::run(&blog).await?;
        }

        Commands::Server { port, ip, open } => {
            let blog = headless_blog::Blog::new(&base_dir, cli.config.as_deref())?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            headless_blog::server::start(blog, &ip, port, open).await?;
        }

        Commands::Version => {
            println!("headless-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
