//! cvserve - personal resume page server
//!
//! Loads the resume data and image assets once, renders the single-page
//! resume, and serves it from a local development HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Serve the resume in the current directory on port 8080
//! cvserve
//!
//! # Different content root and port
//! cvserve --root ~/resume --port 3000
//!
//! # Write a standalone HTML file instead of serving
//! cvserve --export resume.html
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cvserve::config::Config;
use cvserve::constants::{APP_BINARY_NAME, APP_NAME, DATA_DIR};
use cvserve::render::{render_page, Stylesheet};
use cvserve::services::ResumeService;
use cvserve::web::{self, static_files, AppState};

/// cvserve - single-page resume server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Content root containing the data/ and assets/ directories
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the rendered page to FILE and exit instead of serving
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // File config first, CLI flags override.
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(root) = args.root {
        config.paths.root = root;
    }

    info!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    info!("Content root: {}", config.paths.root.display());

    // A missing data directory usually means the wrong working directory,
    // not broken content. Point at the flag before failing on file errors.
    if !config.paths.root.join(DATA_DIR).exists() {
        eprintln!(
            "Error: no {}/ directory under {}",
            DATA_DIR,
            config.paths.root.display()
        );
        eprintln!();
        eprintln!("Run from a directory containing data/ and assets/, or pass one:");
        eprintln!("  {} --root path/to/resume", APP_BINARY_NAME);
        std::process::exit(1);
    }

    let resume = ResumeService::load(&config.paths.root)?;
    info!(
        "Loaded resume for {} ({} positions, {} degrees, {} skill categories)",
        resume.personal.name,
        resume.experience.len(),
        resume.education.len(),
        resume.skills.len()
    );

    if let Some(path) = args.export {
        let css = static_files::stylesheet_text().context("Embedded stylesheet missing")?;
        let html = render_page(&resume, &config.site.title, Stylesheet::Inline(&css));
        std::fs::write(&path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Exported standalone page to {}", path.display());
        return Ok(());
    }

    let state = AppState::new(&resume, &config)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid bind address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    web::run_server(state, addr).await
}
