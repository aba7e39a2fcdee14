//! Process-wide tracing for the `northbound` binary.
//!
//! Log lines go to stderr through the `fmt` layer. With `--otel`, every span
//! is additionally exported as an OpenTelemetry span on stdout.
//!
//! ```no_run
//! northbound_observe::tracing_setup::init_tracing("warn", false).unwrap();
//! // ... serve requests ...
//! northbound_observe::tracing_setup::shutdown_tracing();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Instrumentation scope name on exported spans.
pub const SERVICE_NAME: &str = "northbound";

static OTEL_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// `RUST_LOG` when it is set and parses, otherwise `default_filter`.
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

fn stdout_provider() -> SdkTracerProvider {
    SdkTracerProvider::builder()
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .build()
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(default_filter: &str, enable_otel: bool) -> Result<(), InitError> {
    let otel_layer = enable_otel.then(|| {
        let provider = OTEL_PROVIDER.get_or_init(stdout_provider).clone();
        opentelemetry::global::set_tracer_provider(provider.clone());
        tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME))
    });

    tracing_subscriber::registry()
        .with(build_filter(default_filter))
        .with(
            fmt::layer()
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flush buffered spans and stop the exporter. No-op without `--otel`.
pub fn shutdown_tracing() {
    let Some(provider) = OTEL_PROVIDER.get() else {
        return;
    };
    if let Err(e) = provider.shutdown() {
        // The subscriber may already be gone at this point.
        eprintln!("northbound: span exporter shutdown failed: {e}");
    }
}
