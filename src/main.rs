//! # dupe-detect CLI
//!
//! Command-line interface for the duplicate image detector.
//!
//! ## Usage
//! ```bash
//! dupe-detect ~/Photos
//! dupe-detect -r --hash exact ~/Photos ~/Backup
//! dupe-detect --jobs 8 --output json ~/Photos
//! ```

mod cli;

use dupe_detect::Result;

fn main() -> Result<()> {
    cli::run()
}
