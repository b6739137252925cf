//! One end-to-end relay run: search, format, broadcast.

use crate::announcement::format_announcement;
use crate::broadcast::{DeliveryOutcome, broadcast};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::youtube_api::{VideoCandidate, search_latest_video};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The search came back empty, so nothing was pushed.
    NoVideo,
    Broadcast {
        video: VideoCandidate,
        deliveries: Vec<DeliveryOutcome>,
    },
}

/// Runs the relay once.
///
/// No error is handled here; every failure from the search or the broadcast
/// is returned to the caller unchanged.
pub async fn run(config: &Config) -> Result<RunOutcome> {
    tracing::info!("=== Scam News Bot Started ===");
    tracing::info!(time = %jiff::Timestamp::now(), "run started");

    let Some(video) = search_latest_video(&config.youtube).await? else {
        tracing::info!("no video found, skipping push message");
        return Ok(RunOutcome::NoVideo);
    };

    let announcement = format_announcement(&video);
    let deliveries = broadcast(&config.line, &announcement).await?;

    tracing::info!(
        groups = deliveries.len(),
        "=== Bot execution completed successfully ==="
    );
    Ok(RunOutcome::Broadcast { video, deliveries })
}

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Maps the result of a run to the process exit status, logging the failure
/// banner and the error's full source chain on the way.
///
/// "No video" is a success.
pub fn exit_status(result: Result<RunOutcome>) -> u8 {
    let e = match result {
        Ok(RunOutcome::NoVideo | RunOutcome::Broadcast { .. }) => return EXIT_SUCCESS,
        Err(e) => e,
    };

    let kind = if e.is_configuration() {
        "configuration"
    } else if e.is_upstream() {
        "upstream"
    } else {
        "runtime"
    };
    tracing::error!("=== Bot execution failed ===");
    tracing::error!(kind, error = %e, "run aborted");
    // Debug output of the report walks the whole source chain
    let report = eyre::Report::new(e);
    tracing::error!("{report:?}");
    EXIT_FAILURE
}

/// Resolves the configuration from the environment and runs once.
pub async fn run_from_env() -> Result<RunOutcome> {
    let config = Config::from_env()?;
    run(&config).await
}
