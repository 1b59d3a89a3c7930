//! Diagnostic logging for i2c-term.
//!
//! Diagnostics go through the `log` facade to stderr; command results go
//! to the console output, so the two never interleave on stdout.
//!
//! `RUST_LOG` overrides the default filter.

use env_logger::Env;
use log::LevelFilter;

/// Default filter without `--verbose`.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Filter selected by the verbosity flag.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        DEFAULT_LEVEL
    }
}

/// Install the global logger. Safe to call more than once.
pub fn init(verbose: bool) {
    let level = default_level(verbose);
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}
