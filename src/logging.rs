use color_eyre::Result;
use color_eyre::eyre::Context;
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Keeps the OTLP exporter alive; spans still buffered are flushed on drop.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TracingGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take()
            && let Err(e) = provider.shutdown()
        {
            eprintln!("Failed to shut down tracer provider: {e}");
        }
    }
}

fn otlp_provider(service_name: &str, endpoint: &str) -> Result<SdkTracerProvider> {
    let resource = Resource::builder()
        .with_attributes(vec![KeyValue::new(
            opentelemetry_semantic_conventions::resource::SERVICE_NAME,
            service_name.to_string(),
        )])
        .build();

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .wrap_err("Failed to create OTLP span exporter")?;

    Ok(SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build())
}

/// Install the global subscriber for an application embedding this crate.
///
/// `level` is an `EnvFilter` directive such as `"chart_aggregator=debug"`.
/// Spans are also exported over OTLP when `otlp_endpoint` is set.
pub fn init_tracing(
    service_name: &str,
    otlp_endpoint: Option<&str>,
    level: &str,
) -> Result<TracingGuard> {
    let filter = EnvFilter::try_new(level).wrap_err("Failed to create tracing filter")?;
    let provider = otlp_endpoint
        .map(|endpoint| otlp_provider(service_name, endpoint))
        .transpose()?;

    let telemetry = provider.as_ref().map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer("chart-aggregator"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(telemetry)
        .try_init()
        .wrap_err("A global tracing subscriber is already installed")?;

    Ok(TracingGuard { provider })
}
