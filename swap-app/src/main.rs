//! # Swap Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the price feed adapter
//! - Create the conversion service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swap_hex::{ConversionService, inbound::HttpServer};
use swap_prices::{FeedSource, HttpPriceSource, StaticPriceSource};

use config::{Config, PriceFeed};

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("swap-service"), provider))
}

fn build_source(config: &Config) -> anyhow::Result<FeedSource> {
    let source: FeedSource = match &config.feed {
        PriceFeed::Url(url) => {
            let source = HttpPriceSource::new(url.clone());
            match config.fetch_timeout {
                Some(timeout) => source.with_timeout(timeout)?.into(),
                None => source.into(),
            }
        }
        PriceFeed::File(path) => StaticPriceSource::from_file(path.clone()).into(),
    };
    Ok(source)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // OpenTelemetry export only when a collector is configured
    let otel = config
        .otlp_endpoint
        .as_deref()
        .map(init_tracer)
        .transpose()?;
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,swap_app=debug,swap_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting swap server on port {}", config.port);
    tracing::info!("Using price feed: {:?}", config.feed);
    if config.fetch_timeout.is_none() {
        tracing::warn!("No PRICE_FETCH_TIMEOUT_SECS set, price fetches may hang");
    }

    let service = ConversionService::new(build_source(&config)?);

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
