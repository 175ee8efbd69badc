//! Logging and tracing initialization.

use crate::config::LoggingConfig;

/// Crates whose events follow the configured level. Everything else,
/// including the `gif` decoder, only reports warnings.
const GIFMAKE_TARGETS: [&str; 4] = [
    "gifmake",
    "gifmake_common",
    "gifmake_animation_core",
    "gifmake_gif_source",
];

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` wins when set. Otherwise a bare level such as `"debug"` is
/// scoped to GifMake's own crates and a full directive string is used as is.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(&config.level)));

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

/// Filter directives for a configured level.
pub fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        return level.to_string();
    }

    let level = if level.is_empty() { "info" } else { level };
    std::iter::once("warn".to_string())
        .chain(GIFMAKE_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_scoped_to_gifmake() {
        assert_eq!(
            filter_directives("debug"),
            "warn,gifmake=debug,gifmake_common=debug,gifmake_animation_core=debug,gifmake_gif_source=debug"
        );
    }

    #[test]
    fn test_empty_level_defaults_to_info() {
        assert!(filter_directives("  ").starts_with("warn,gifmake=info,"));
    }

    #[test]
    fn test_full_directives_passed_through() {
        assert_eq!(filter_directives("gifmake=trace,warn"), "gifmake=trace,warn");
        assert_eq!(filter_directives("gif=debug"), "gif=debug");
    }

    #[test]
    fn test_directives_parse() {
        for level in ["info", "debug", "gifmake_gif_source=trace,warn"] {
            assert!(
                tracing_subscriber::EnvFilter::try_new(filter_directives(level)).is_ok(),
                "{level}"
            );
        }
    }
}
