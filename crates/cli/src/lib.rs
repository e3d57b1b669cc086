pub mod commands;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::Env;

/// Canonicalize the root path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // A path that does not exist yet is joined onto the cwd so the
        // scanner reports the failure with an absolute path.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Map `-v` occurrences to a default log filter.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr logger. `RUST_LOG` overrides the verbosity flag.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(log_level(verbose)))
        .format_timestamp(None)
        .try_init();
}
