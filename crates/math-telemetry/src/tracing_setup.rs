//! Subscriber setup.
//!
//! Always installs an `EnvFilter` and a fmt layer. With the `otlp` feature an
//! OpenTelemetry layer is added that batches spans to the configured
//! collector.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{TelemetryConfig, TelemetryError};

/// Guard that shuts down the tracer provider on drop.
pub struct TracingGuard {
    #[cfg(feature = "otlp")]
    provider: opentelemetry_sdk::trace::TracerProvider,
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        #[cfg(feature = "otlp")]
        if let Err(e) = self.provider.shutdown() {
            eprintln!("Error shutting down tracer provider: {:?}", e);
        }
    }
}

/// Build the filter from the configured directives.
pub(crate) fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter(e.to_string()))
}

/// Install the global subscriber.
pub fn init_tracing(config: &TelemetryConfig) -> Result<TracingGuard, TelemetryError> {
    let env_filter = env_filter(config)?;

    let fmt_layer = if config.json_logs {
        // JSON output for containers/production
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        // Pretty output for development
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .boxed()
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(fmt_layer);

    #[cfg(feature = "otlp")]
    let (registry, provider) = {
        let (otel_layer, provider) = otlp::layer(config)?;
        (registry.with(otel_layer), provider)
    };

    registry
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        environment = %config.environment,
        json = config.json_logs,
        "Logging initialized"
    );

    Ok(TracingGuard {
        #[cfg(feature = "otlp")]
        provider,
    })
}

#[cfg(feature = "otlp")]
mod otlp {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::{
        runtime,
        trace::{self, RandomIdGenerator, Sampler},
        Resource,
    };
    use tracing::Subscriber;
    use tracing_subscriber::registry::LookupSpan;

    use crate::{TelemetryConfig, TelemetryError};

    pub(super) fn layer<S>(
        config: &TelemetryConfig,
    ) -> Result<
        (
            tracing_opentelemetry::OpenTelemetryLayer<S, opentelemetry_sdk::trace::Tracer>,
            opentelemetry_sdk::trace::TracerProvider,
        ),
        TelemetryError,
    >
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let exporter = opentelemetry_otlp::new_exporter()
            .tonic()
            .with_endpoint(&config.otlp_endpoint);

        let provider = opentelemetry_otlp::new_pipeline()
            .tracing()
            .with_exporter(exporter)
            .with_trace_config(
                trace::Config::default()
                    .with_sampler(Sampler::AlwaysOn)
                    .with_id_generator(RandomIdGenerator::default())
                    .with_resource(Resource::new(vec![
                        KeyValue::new("service.name", config.service_name.clone()),
                        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
                        KeyValue::new("deployment.environment", config.environment.clone()),
                    ])),
            )
            .install_batch(runtime::Tokio)
            .map_err(|e| TelemetryError::TracerInit(e.to_string()))?;

        let tracer = provider.tracer(config.service_name.clone());
        Ok((tracing_opentelemetry::layer().with_tracer(tracer), provider))
    }
}
