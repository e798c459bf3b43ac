use anyhow::{Context, Result};
use kings::{fetch, run, RunOutcome};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout is the report) ─────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) fetch, normalize, aggregate, report ────────────────────
    let client = Client::new();
    let url = fetch::monarchs_url()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // fetch failures are reported by `run` and end normally; parse/empty errors are fatal
    match run(&client, &url, &mut out)
        .await
        .context("building monarch report")?
    {
        RunOutcome::Reported(_) => info!("done"),
        RunOutcome::FetchFailed => info!("done without report"),
    }
    Ok(())
}
