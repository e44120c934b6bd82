//! Logger setup for the binary
//!
//! The library only emits records through the `log` facade; the binary
//! decides where they go. `RUST_LOG` overrides the default level.

use env_logger::Env;

/// Default filter when `RUST_LOG` is unset
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "wordle_env=debug" } else { "warn" }
}

/// Install `env_logger` as the global logger
///
/// Calling it again is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
