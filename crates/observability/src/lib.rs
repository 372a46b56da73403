//! Logging setup for demo hosts.
//!
//! Flow transitions in `trustflow-pipeline` log at debug, and a demo run
//! wants those visible without per-run `RUST_LOG` fiddling. The default
//! filter turns them on while keeping everything else at `info`.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset: pipeline flow events visible,
/// everything else quiet.
pub const DEFAULT_DIRECTIVES: &str = "info,trustflow_pipeline=debug";

/// Initialize logging with [`DEFAULT_DIRECTIVES`]. Repeated calls are no-ops.
pub fn init() {
    init_with_directives(DEFAULT_DIRECTIVES);
}

/// Initialize logging with explicit filter directives.
///
/// `RUST_LOG` still wins when set. Output is flattened JSON with targets
/// kept, since the filter directives key on crate names.
pub fn init_with_directives(directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_target(true)
        .try_init();
}
