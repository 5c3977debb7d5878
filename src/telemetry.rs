//! Opt-in tracing setup for hosts and the fixture tool.
//!
//! Chart engines only emit `tracing` events; nothing here runs unless a host
//! calls [`init_default_tracing`] or [`init_tracing`]. Hosts with their own
//! subscriber skip both.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Filter that surfaces the engines' state-change events.
pub const VERBOSE_FILTER: &str = "story_arcs=debug,info";

/// [`init_tracing`] with [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact fmt subscriber. `RUST_LOG` wins over `fallback_filter`.
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
