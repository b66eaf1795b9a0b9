//! Tracing subscriber initialisation.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` overrides `server.log_level`. Calling this more than once is a
/// no-op.
pub fn init(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let _ = match config.log_format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = ServerConfig {
            log_level: "not a [valid filter".to_string(),
            ..Default::default()
        };
        init(&config);
        init(&ServerConfig::default());
    }
}
