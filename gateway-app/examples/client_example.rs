//! Client example demonstrating the payment flow against a running gateway.
//!
//! Requires a Stripe sandbox key:
//!   STRIPE_SECRET_KEY=sk_test_... cargo run -p gateway-app --example client_example

use std::net::SocketAddr;

use gateway_client::GatewayClient;
use gateway_hex::{PaymentService, inbound::HttpServer};
use gateway_stripe::StripeClient;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let secret_key = std::env::var("STRIPE_SECRET_KEY")
        .map_err(|_| anyhow::anyhow!("STRIPE_SECRET_KEY is required (use an sk_test_ key)"))?;

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting gateway on port {port}...");

    // Start server in background
    let service = PaymentService::new(StripeClient::new(secret_key));
    let server = HttpServer::new(service);
    tokio::spawn(async move { server.run(&format!("127.0.0.1:{port}")).await });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    let client = GatewayClient::new(format!("http://127.0.0.1:{port}"));

    // Health check
    let healthy = client.health().await?;
    println!("✅ Gateway health: {healthy}");

    // Create a $10.00 payment intent
    let payment = client.pay(1000, "usd", None).await?;
    println!(
        "✅ Created payment {} (status={})",
        payment.payment_id, payment.status
    );

    // Look it up again
    let status = client.status(&payment.payment_id).await?;
    println!(
        "   Status: {} {} {} ({})",
        status.id, status.amount, status.currency, status.status
    );

    // A fresh intent has collected no money yet, so the refund is rejected
    let refund = client.refund(&payment.payment_id, None).await;
    match refund {
        Err(err) => println!("✅ Refund correctly rejected: {err}"),
        Ok(refund) => println!("⚠️ Unexpected refund accepted: {}", refund.refund_id),
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
