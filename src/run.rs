// src/run.rs

use crate::error::{KingsError, KingsResult};
use crate::fetch::fetch_monarchs_from;
use crate::monarch::{current_year, parse_monarchs};
use crate::stats::Summary;
use reqwest::Client;
use std::io::Write;
use tracing::warn;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The four report lines were written.
    Reported(Summary),
    /// The GET failed; a single error line was written instead of the report.
    FetchFailed,
}

/// Fetch, normalize, aggregate, then write the report to `out`.
///
/// Transport and status failures are handled here: one `Error: ...` line goes to `out`
/// and the run ends normally. Parse and empty-dataset errors propagate, and `out` is
/// left untouched since the report is only written once every figure is known.
pub async fn run<W: Write>(client: &Client, url: &Url, out: &mut W) -> KingsResult<RunOutcome> {
    let body = match fetch_monarchs_from(client, url).await {
        Ok(body) => body,
        Err(e) if e.is_fetch_failure() => {
            warn!(error = %e, "no report");
            writeln!(out, "{}", fetch_failure_line(&e))?;
            return Ok(RunOutcome::FetchFailed);
        }
        Err(e) => return Err(e),
    };

    let monarchs = parse_monarchs(&body, current_year())?;
    let summary = Summary::compute(&monarchs)?;
    writeln!(out, "{}", summary)?;
    Ok(RunOutcome::Reported(summary))
}

fn fetch_failure_line(err: &KingsError) -> String {
    match std::error::Error::source(err) {
        Some(cause) => format!("Error: {}: {}", err, cause),
        None => format!("Error: {}", err),
    }
}
