use std::env;
use std::fs;

use ownership_map_rs::TransformBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ownership_map_rs=info".into()),
        )
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/Ownership_Map.csv".to_string());

    let dataset = TransformBuilder::new("WBD")
        .company_name("Warner Bros Discovery Inc")
        .run_path(&path)?;

    println!("--- {} ({}) ---", dataset.company_name, dataset.ticker);
    println!("Holders: {}", dataset.summary.total_holders);
    println!("Portfolios: {}", dataset.summary.total_portfolios);
    println!("Total shares: {}", dataset.summary.total_shares);
    println!("Total % out: {:.2}", dataset.summary.total_percent_out);

    println!("\nTop 5 holders:");
    for holder in dataset.holders.iter().take(5) {
        println!(
            "  - {}: {} shares ({:.2}%)",
            holder.holder_name, holder.total_position, holder.total_percent_out
        );
    }

    fs::write("ownership_transformed.json", dataset.to_json()?)?;
    println!("\nSaved ownership_transformed.json");

    Ok(())
}
