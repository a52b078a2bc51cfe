use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

fn levels(verbose: bool) -> (LevelFilter, &'static str) {
    if verbose {
        (LevelFilter::DEBUG, "debug")
    } else {
        (LevelFilter::INFO, "info")
    }
}

fn subscriber(
    verbose: bool,
    env_filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let (level_filter, _) = levels(verbose);
    let app_filter = Targets::new()
        .with_target("fxrate", level_filter)
        .with_target("tower_http", level_filter);

    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(app_filter)
        .with(env_filter)
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let (_, level) = levels(verbose);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    subscriber(verbose, env_filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_default_level_is_info() {
        tracing::subscriber::with_default(subscriber(false, EnvFilter::new("info")), || {
            assert!(tracing::enabled!(target: "fxrate", Level::INFO));
            assert!(!tracing::enabled!(target: "fxrate", Level::DEBUG));
            assert!(!tracing::enabled!(target: "hyper", Level::INFO));
        });
    }

    #[test]
    fn test_verbose_enables_debug() {
        tracing::subscriber::with_default(subscriber(true, EnvFilter::new("debug")), || {
            assert!(tracing::enabled!(target: "fxrate", Level::DEBUG));
            assert!(tracing::enabled!(target: "tower_http", Level::DEBUG));
            assert!(!tracing::enabled!(target: "hyper", Level::DEBUG));
        });
    }
}
