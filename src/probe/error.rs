//! Probe error definitions.

use thiserror::Error;

/// Errors that prevent receipt of an HTTP response.
///
/// Both variants map to exit code 1; the distinction exists so the
/// diagnostic on stderr names the deadline when that is what fired.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The whole-request deadline elapsed before headers arrived.
    #[error("timed out after {0} seconds")]
    Timeout(u64),

    /// DNS, connect, or protocol failure below the HTTP layer.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
