//! Single-shot HTTP probing.
//!
//! # Responsibilities
//! - Issue one GET against the configured URL
//! - Bound the whole request with the configured deadline
//! - Classify the result

use std::time::Duration;

use url::Url;

use crate::probe::error::ProbeError;
use crate::probe::outcome::ProbeOutcome;

/// Probe configuration, parsed once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Target to probe.
    pub url: Url,

    /// Upper bound on total request duration, in seconds.
    pub timeout_secs: u64,
}

/// Single-shot HTTP prober.
pub struct Prober {
    config: ProbeConfig,
    client: reqwest::Client,
}

impl Prober {
    /// Build a prober whose client enforces the configured deadline.
    ///
    /// The timeout is set on the client, so connect, send, and header
    /// receipt share one budget; there is no separate timer. Redirects are
    /// not followed, so the raw status is what gets classified.
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { config, client })
    }

    /// Issue the probe and classify the outcome.
    pub async fn run(&self) -> Result<ProbeOutcome, ProbeError> {
        tracing::debug!(
            url = %self.config.url,
            timeout_secs = self.config.timeout_secs,
            "Probing target"
        );

        let response = match self.client.get(self.config.url.clone()).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return Err(ProbeError::Timeout(self.config.timeout_secs));
            }
            Err(e) => return Err(ProbeError::Transport(e)),
        };

        let status = response.status().as_u16();
        // The body is never read; dropping the response releases the connection.
        drop(response);

        let outcome = ProbeOutcome::from_status(status);
        match outcome {
            ProbeOutcome::Healthy(code) => {
                tracing::debug!(status = code, "Target healthy");
            }
            ProbeOutcome::Unhealthy(code) => {
                tracing::warn!(status = code, "Target returned non-ok status");
            }
        }

        Ok(outcome)
    }
}

/// Build a prober and run it once.
pub async fn probe(config: ProbeConfig) -> Result<ProbeOutcome, ProbeError> {
    Prober::new(config)?.run().await
}
