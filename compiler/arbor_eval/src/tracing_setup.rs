use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging dispatch.
///
/// Call this once at startup. Uses the `RUST_LOG` environment variable
/// for filtering (e.g., `RUST_LOG=arbor_eval=trace`). Spans nest as the
/// dispatcher descends, so output is rendered as an indented tree.
///
/// Does nothing when `RUST_LOG` is unset, or when another subscriber is
/// already installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true);
            if tracing_subscriber::registry()
                .with(tree)
                .with(filter)
                .try_init()
                .is_err()
            {
                tracing::debug!("global subscriber already set");
            }
        }
    });
}
