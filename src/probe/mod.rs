//! Probe subsystem.
//!
//! # Data Flow
//! ```text
//! ProbeConfig (url + timeout)
//!     → client.rs (one bounded GET)
//!     → outcome.rs (status classification)
//!     → exit-code mapping in main
//! ```
//!
//! # Design Decisions
//! - One request, one deadline; no retries (the supervisor re-invokes)
//! - Redirects are not followed: a 3xx is a received status, not a hop
//! - Timeout is a distinct error kind but shares exit code 1 with other
//!   transport failures

pub mod client;
pub mod error;
pub mod outcome;

pub use client::{probe, ProbeConfig, Prober};
pub use error::ProbeError;
pub use outcome::{exit_code, ProbeOutcome};
