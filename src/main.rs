//! CLI entry point for blog-renderer

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_renderer::fetch::HttpFetcher;
use blog_renderer::Blog;

#[derive(Parser)]
#[command(name = "blog-renderer")]
#[command(version)]
#[command(about = "Render markdown blog posts and post listings", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Fetch content from a live site instead of the site directory
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single post page to stdout
    #[command(alias = "p")]
    Post {
        /// Post slug, as in /content/blog/<slug>.md
        slug: String,
    },

    /// List the latest published posts
    #[command(alias = "l")]
    List {
        /// Print the post cards instead of a summary
        #[arg(long)]
        html: bool,
    },

    /// Build static pages into the public directory
    #[command(alias = "b")]
    Build,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_renderer=debug,info"
    } else {
        "blog_renderer=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let blog = match cli.base_url.as_deref() {
        Some(url) => {
            tracing::debug!("Fetching content from {}", url);
            Blog::with_fetcher(&base_dir, Arc::new(HttpFetcher::new(url)))?
        }
        None => Blog::new(&base_dir)?,
    };

    match cli.command {
        Commands::Post { slug } => {
            tracing::info!("Rendering post {}", slug);
            let html = blog_renderer::commands::post::run(&blog, &slug).await?;
            println!("{}", html);
        }

        Commands::List { html } => {
            blog_renderer::commands::list::run(&blog, html).await?;
        }

        Commands::Build => {
            if cli.base_url.is_some() {
                anyhow::bail!("build reads posts from the site directory; drop --base-url");
            }
            tracing::info!("Building site in {:?}", blog.base_dir);
            let count = blog_renderer::commands::build::run(&blog).await?;
            println!("Built {} posts into {:?}", count, blog.public_dir);
        }
    }

    Ok(())
}
