//! Structured logging setup, built on `tracing`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `verbose` wins over `RUST_LOG`; `no_color` disables ANSI regardless of TTY
/// detection (useful for CI / piped output).
pub fn init_logger(verbose: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("unused_finder=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unused_finder=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_construction_does_not_panic() {
        let _ = EnvFilter::new("unused_finder=debug");
        let _ = EnvFilter::new("unused_finder=info");
    }
}
