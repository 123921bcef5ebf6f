//! Diagnostic logging
//!
//! Log output goes to stderr so report output on stdout stays clean for
//! piping. Verbosity is controlled by `LEDGER_LOG` using the usual
//! `tracing` filter syntax (e.g. `LEDGER_LOG=ledger_lens=debug`).

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "LEDGER_LOG";

/// Filter used when `LEDGER_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "ledger_lens=warn";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber once per process
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber installed by an embedding application wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
