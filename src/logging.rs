//! Logger setup.
//!
//! Code logs through the `log` facade; records are bridged into a
//! `tracing-subscriber` formatter on stderr so they never interleave with
//! the wizard's prompts on stdout.

use tracing_subscriber::EnvFilter;

/// Install the global logger. `RUST_LOG` takes precedence over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "craftlogic=debug"
    } else {
        "craftlogic=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
