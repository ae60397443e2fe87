//! Opt-in tracing setup for applications embedding `dasha-rs`.
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the host's job. These helpers cover the common case behind the
//! `telemetry` feature, and hosts with their own subscriber simply ignore
//! this module.

/// Installs a compact `tracing` subscriber filtered from `RUST_LOG`,
/// defaulting to `info`.
///
/// Returns `true` when the subscriber was installed. Returns `false` when
/// the `telemetry` feature is disabled or a global subscriber already
/// exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter("info")
}

/// Like [`init_default_tracing`] but with an explicit fallback filter
/// directive, e.g. `"dasha_rs=debug"`.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
