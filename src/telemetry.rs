//! Opt-in tracing setup for hosts embedding `chart-showcase`.
//!
//! The library only emits `tracing` events. Hosts that already own a
//! subscriber can ignore this module entirely.

/// Default directive used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "chart_showcase=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_DIRECTIVE`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_LOG_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
