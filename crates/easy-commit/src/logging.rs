//! Log setup
//!
//! Level precedence: `-q` (error), `-v` (debug), `RUST_LOG`, the config
//! file's `[logger] level`, then `warn`. The config file is read after the
//! logger starts, so the logger is installed first and its level is adjusted
//! once the config is known.

use log::LevelFilter;

/// Where the active level came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    Flag,
    Environment,
    Default,
}

/// Install the stderr logger from CLI flags and the environment
pub fn init(verbose: bool, quiet: bool) -> LevelSource {
    let rust_log = std::env::var("RUST_LOG").ok().filter(|v| !v.trim().is_empty());

    let mut builder = env_logger::Builder::new();
    builder
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false);

    let source = match (quiet, verbose, rust_log) {
        (true, _, _) => {
            builder.filter_level(LevelFilter::Error);
            LevelSource::Flag
        }
        (false, true, _) => {
            builder.filter_level(LevelFilter::Debug);
            LevelSource::Flag
        }
        (false, false, Some(filters)) => {
            builder.parse_filters(&filters);
            LevelSource::Environment
        }
        (false, false, None) => {
            // Wide open filter; the global max level gates output until the config is read
            builder.filter_level(LevelFilter::Trace);
            LevelSource::Default
        }
    };

    if builder.try_init().is_err() {
        return source;
    }
    if source == LevelSource::Default {
        log::set_max_level(LevelFilter::Warn);
    }
    source
}

/// Apply the configured level unless a flag or `RUST_LOG` already chose one
pub fn apply_config_level(source: LevelSource, level: &str) {
    if source != LevelSource::Default {
        return;
    }

    match parse_level(level) {
        Some(filter) => log::set_max_level(filter),
        None => log::warn!("unknown log level '{}' in config, using warn", level),
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
