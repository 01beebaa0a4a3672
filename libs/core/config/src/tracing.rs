use crate::Environment;
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with the project-standard report configuration.
///
/// Call this first thing in `main()`. Safe to call more than once.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Build the filter: `RUST_LOG` when present, otherwise the environment default.
pub fn env_filter(environment: &Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_log_filter()))
}

/// Initialize tracing with environment-aware output and span-trace capture.
///
/// All log output goes to stderr; stdout is reserved for command output
/// (state documents, schemas) so it can be piped.
///
/// - **Production** (`APP_ENV=production`): JSON lines, flattened events,
///   no module targets.
/// - **Development** (default): compact human-readable lines.
///
/// Both install [`tracing_error::ErrorLayer`] so eyre reports carry span
/// traces. Calling this again after a subscriber is set is a no-op.
pub fn init_tracing(environment: &Environment) {
    let filter = env_filter(environment);

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => debug!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_uses_environment_default() {
        temp_env::with_var_unset("RUST_LOG", || {
            let filter = env_filter(&Environment::Production);
            assert_eq!(filter.to_string(), "warn");
        });
    }

    #[test]
    fn test_env_filter_honours_rust_log() {
        temp_env::with_var("RUST_LOG", Some("debug"), || {
            let filter = env_filter(&Environment::Production);
            assert_eq!(filter.to_string(), "debug");
        });
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        // Second call must not panic
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Production);
    }
}
