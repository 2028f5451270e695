// src/dataset/assemble.rs

use chrono::Utc;

use super::link::LinkOutcome;
use super::model::{DatasetSummary, Holder, OwnershipDataset};

/// Rounds to two decimal places. Applied exactly once, here; intermediate
/// stages keep full precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Packages holders and resolved portfolios into the final dataset.
pub(crate) fn assemble(
    ticker: &str,
    company_name: &str,
    mut holders: Vec<Holder>,
    outcome: LinkOutcome,
) -> OwnershipDataset {
    for holder in &mut holders {
        holder.total_percent_out = round2(holder.total_percent_out);
    }

    let mut portfolios = outcome.portfolios;
    for portfolio in &mut portfolios {
        portfolio.percent_out = round2(portfolio.percent_out);
        portfolio.percent_portfolio = portfolio.percent_portfolio.map(round2);
    }

    let summary = DatasetSummary {
        total_holders: holders.len() as u64,
        total_portfolios: portfolios.len() as u64,
        total_shares: holders.iter().map(|h| h.total_position).sum(),
        total_percent_out: round2(holders.iter().map(|h| h.total_percent_out).sum()),
    };

    OwnershipDataset {
        ticker: ticker.to_string(),
        company_name: company_name.to_string(),
        generated_at: Utc::now(),
        holders,
        portfolios,
        summary,
    }
}
