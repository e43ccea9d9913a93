//! Gateway CLI
//!
//! Command-line interface for the Payment Gateway API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use gateway_client::GatewayClient;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(author, version, about = "Payment Gateway CLI client", long_about = None)]
struct Cli {
    /// Base URL of the gateway API
    #[arg(long, env = "GATEWAY_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a payment intent
    Pay {
        /// Amount in minor units (cents)
        #[arg(long)]
        amount: i64,
        /// Currency code (usd, eur, gbp, cad, aud, jpy)
        #[arg(long, default_value = "usd")]
        currency: String,
        /// Existing payment method id (pm_...)
        #[arg(long)]
        payment_method: Option<String>,
    },
    /// Look up the status of a payment
    Status {
        /// Payment id (pi_...)
        id: String,
    },
    /// Refund a succeeded payment
    Refund {
        /// Payment id (pi_...)
        id: String,
        /// Partial amount in minor units; omit for a full refund
        #[arg(long)]
        amount: Option<i64>,
    },
    /// Create the gateway's fixture payment method
    Methods,
    /// Check gateway health
    Health,
    /// Start a local webhook listener that prints deliveries
    Listen {
        /// Port to listen on
        #[arg(long, default_value = "4242")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = GatewayClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ Gateway is healthy");
            } else {
                println!("✗ Gateway is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Pay {
            amount,
            currency,
            payment_method,
        } => {
            let payment = client.pay(amount, &currency, payment_method).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Status { id } => {
            let status = client.status(&id).await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }

        Commands::Refund { id, amount } => {
            let refund = client.refund(&id, amount).await?;
            println!("{}", serde_json::to_string_pretty(&refund)?);
        }

        Commands::Methods => {
            let method = client.payment_methods().await?;
            println!("{}", serde_json::to_string_pretty(&method)?);
        }

        Commands::Listen { port } => {
            let app = axum::Router::new().route("/webhook", axum::routing::post(handle_webhook));
            let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
            println!("Listening for webhooks on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

async fn handle_webhook(
    headers: axum::http::HeaderMap,
    body: String,
) -> impl axum::response::IntoResponse {
    println!("POST /webhook HTTP/1.1");
    for (name, value) in &headers {
        println!("{}: {:?}", name, value);
    }
    println!();
    println!("{}", body);
    println!("----------------------------------------");
    axum::http::StatusCode::OK
}
