use clap::{Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "order-service")]
#[command(about = "client cli used to query the order service", version, long_about = None)]
struct Cli {
    #[arg(long, help = "Base url of the order service", default_value = DEFAULT_HOST)]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// list orders, one per user
    Orders,
}

const DEFAULT_HOST: &str = "http://localhost:5002";

#[derive(Debug, Deserialize)]
pub(crate) struct Order {
    pub user: String,
    pub order: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetOrdersResponse {
    pub orders: Vec<Order>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = args.host.trim_end_matches('/');

    match args.command {
        Commands::Orders => {
            let res = Client::new()
                .get(format!("{}/{}", host, "orders"))
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    let res = res.json::<GetOrdersResponse>().await?;
                    if res.orders.is_empty() {
                        println!("no orders");
                    }
                    for Order { user, order } in res.orders {
                        println!("{user}\t{order}");
                    }
                },
                unexpected => {
                    let reason = res.text().await.unwrap_or_default();
                    anyhow::bail!("got unexpected status code, {}, {}", unexpected, reason);
                },
            }
        }
    };
    Ok(())
}
