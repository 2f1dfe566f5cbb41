//! # dupe-detect
//!
//! Finds duplicate images in a batch of files and directories.
//!
//! Three notions of "same image" are supported: identical bytes,
//! identical decoded pixels, or an identical perceptual signature.
//!
//! ## Architecture
//! The library is split into a core engine and presentation layers:
//! - `core` - The duplicate detection engine
//! - `events` - Event-driven progress reporting
//! - `error` - User-friendly error types
//!
//! The command-line front end lives in the binary.

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{DetectorError, Result};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the library
///
/// Honors `RUST_LOG`; `verbose` forces the `debug` level. Logs go to
/// stderr so they never interleave with report output on stdout.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Already installed (e.g. by a test harness) is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
