//! `commonsd` — the commons site backend server.
//!
//! Serves the JSON content API, the CMS publish webhook, and the form
//! submission endpoints. Configuration comes from `.env` + `commons.toml`
//! + `COMMONS_*` env vars; see `commons-config`.
//!
//! Usage:
//!   commonsd --port 8080

use anyhow::Context;
use clap::Parser;
use commons_cms::CmsClient;
use commons_config::{ContentVersion, SiteConfig};
use commons_mail::Mailer;
use commons_server::{AppState, build_router};

mod config_warnings;

#[derive(Parser, Debug)]
#[command(name = "commonsd")]
#[command(about = "Content API server for the commons community site", version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("commonsd error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.quiet, args.verbose)?;

    let config = SiteConfig::load_with_dotenv().context("failed to load configuration")?;
    config_warnings::warn_misconfigured_env(&config);
    if !config.cms.is_configured() {
        tracing::warn!("no CMS token configured; content endpoints will serve empty results");
    } else if config.cms.token.is_empty()
        && config.cms.content_version() == ContentVersion::Published
    {
        tracing::warn!(
            "only a preview CMS token is configured; published content will be fetched with it"
        );
    }

    let state = build_state(config)?;
    let app = build_router(state);

    let addr = format!("{}:{}", args.bind, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "commonsd listening");
    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;
    Ok(())
}

/// Construct the injected application state once, at startup.
fn build_state(config: SiteConfig) -> anyhow::Result<AppState> {
    let mut cms = CmsClient::new(&config.cms);
    if config.general.content_cache {
        cms = cms.with_cache();
    }

    let mailer = Mailer::from_config(&config.smtp).context("failed to set up SMTP mailer")?;
    if mailer.is_none() {
        tracing::warn!("SMTP not configured; form endpoints will answer 503");
    }

    Ok(AppState::new(cms, mailer, config))
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("COMMONS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
