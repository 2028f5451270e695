use std::env;
use std::fs;

use ownership_map_rs::{OwnershipDataset, StoreClient, UpsertBuilder};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ownership_map_rs=info".into()),
        )
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "ownership_transformed.json".to_string());
    let dataset = OwnershipDataset::from_json(&fs::read_to_string(&path)?)?;

    let client = StoreClient::builder()
        .base_url(Url::parse(&env::var("OWNERSHIP_STORE_URL")?)?)
        .service_key(env::var("OWNERSHIP_STORE_KEY")?)
        .build()?;

    let report = UpsertBuilder::new(client).run(&dataset).await?;

    println!("--- Upsert complete ---");
    println!("Holders written: {}", report.holders_written);
    println!("Portfolios written: {}", report.portfolios_written);
    println!("Portfolios unresolved: {}", report.portfolios_unresolved);
    println!("Record failures: {}", report.record_failures);
    println!("Summary view refreshed: {}", report.summary_refreshed);

    Ok(())
}
