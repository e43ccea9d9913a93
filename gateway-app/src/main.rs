//! # Gateway Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment (fail-fast on a bad secret key)
//! - Build the Stripe client
//! - Create the payment service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway_hex::{PaymentService, inbound::HttpServer};
use gateway_stripe::StripeClient;

fn init_tracer() -> (sdktrace::Tracer, sdktrace::SdkTracerProvider) {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .expect("failed to create OTLP span exporter");

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    (provider.tracer("payment-gateway"), provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize OpenTelemetry tracing
    let (otel_tracer, otel_provider) = init_tracer();
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gateway_app=debug,gateway_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting payment gateway on port {}", config.port);

    // Build the Stripe adapter
    let mut client = StripeClient::new(config.stripe_secret_key);
    if let Some(base) = config.stripe_api_base {
        tracing::info!("Using provider API base {}", base);
        client = client.with_api_base(base);
    }
    match config.stripe_webhook_secret {
        Some(secret) => client = client.with_webhook_secret(secret),
        None => {
            tracing::warn!("STRIPE_WEBHOOK_SECRET not set; webhook deliveries will be rejected")
        }
    }

    // Create the payment service
    let mut service = PaymentService::new(client);
    if let Some(card) = config.test_card {
        service = service.with_test_card(card);
    }

    // Create and run the HTTP server
    let server = HttpServer::with_rate_limit(service, config.rate_limit_per_minute);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    let _ = otel_provider.shutdown();
    Ok(())
}
