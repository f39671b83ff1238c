//! Logger setup for the binary

use env_logger::{Builder, Env};

/// Environment variable holding the log filter, e.g. `WORDLE_LOG=debug`
pub const LOG_ENV: &str = "WORDLE_LOG";

/// Initialize logging with a filter taken from `WORDLE_LOG`.
///
/// Defaults to `warn` when the variable is unset. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init_logging() {
    let _ = Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .try_init();
}
