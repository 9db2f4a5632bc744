//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name reported in every trace.
const SERVICE_NAME: &str = "LoginGate";

/// Trace file name inside the data directory.
const TRACE_FILE: &str = "logingate-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to
/// `~/.local/share/zellij/logingate/logingate-otlp.json`.
///
/// The filter comes from `trace_level` (default `info`). Tracing is optional:
/// if the data directory cannot be created, nothing is installed. Only the
/// first call takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter_for(config))
        .with(otel_layer)
        .try_init();
}

/// Level filter from config. Unparseable directives fall back to the default.
fn filter_for(config: &Config) -> EnvFilter {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_info() {
        assert_eq!(filter_for(&Config::default()).to_string(), "info");
    }

    #[test]
    fn configured_level_is_used() {
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        assert_eq!(filter_for(&config).to_string(), "debug");
    }
}
