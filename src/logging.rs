//! Log setup for the binary

use log::LevelFilter;

/// Install the `env_logger` backend
///
/// `verbosity` is the number of `-v` flags: 0 shows warnings, 1 info,
/// 2 debug, 3 or more trace. A `RUST_LOG` variable takes precedence.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .format_timestamp(None)
        .parse_default_env();
    // A second init (tests, embedding) is harmless
    let _ = builder.try_init();
}

const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
