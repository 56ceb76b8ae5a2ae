//! Command-line interface definition.

use clap::Parser;
use url::Url;

use crate::probe::ProbeConfig;

#[derive(Parser)]
#[command(name = "healthprobe")]
#[command(about = "Single-shot HTTP liveness probe for containerized services", long_about = None)]
pub struct Cli {
    /// URL to probe.
    #[arg(short, long, default_value = "http://localhost:3001/")]
    pub url: Url,

    /// Upper bound on total request duration, in seconds.
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

impl Cli {
    /// Freeze the parsed flags into the immutable probe configuration.
    pub fn into_config(self) -> ProbeConfig {
        ProbeConfig {
            url: self.url,
            timeout_secs: self.timeout,
        }
    }
}
