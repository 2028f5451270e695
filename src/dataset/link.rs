// src/dataset/link.rs

use tracing::{debug, warn};

use crate::core::{NameMatcher, numeric};
use crate::ingest::RawRow;

use super::model::{Holder, HolderIdx, Portfolio};

/// Resolved portfolios plus the count of rows no holder could be found
/// for.
#[derive(Debug, Default)]
pub struct LinkOutcome {
    /// Portfolios with a resolved owning holder, in source order.
    pub portfolios: Vec<Portfolio>,
    /// Portfolio rows dropped because no holder matched their name.
    pub unresolved: usize,
}

/// Builds the holder lookup used for linking. Holders register in
/// first-seen order; substring fallbacks resolve in that order.
fn holder_matcher(holders: &[Holder]) -> NameMatcher<HolderIdx> {
    let mut matcher = NameMatcher::new();
    for (idx, holder) in holders.iter().enumerate() {
        matcher.insert(holder.holder_name.clone(), HolderIdx(idx));
    }
    matcher
}

/// Associates each portfolio row with its owning holder.
///
/// Rows without a portfolio name carry nothing worth keeping and are
/// skipped. Rows whose holder name resolves through no strategy are
/// dropped and counted, never fatal.
pub fn link_portfolios(rows: &[RawRow], holders: &[Holder], ticker: &str) -> LinkOutcome {
    let matcher = holder_matcher(holders);
    let mut outcome = LinkOutcome::default();

    for row in rows {
        let Some(portfolio_name) = row.portfolio_name.as_deref() else {
            debug!("skipping portfolio row without a portfolio name");
            continue;
        };
        let holder_field = row.holder_name.as_deref().unwrap_or("");

        let Some((holder_idx, strategy)) = matcher.resolve(holder_field) else {
            warn!(
                portfolio = portfolio_name,
                holder = holder_field,
                "no holder found for portfolio, dropping row"
            );
            outcome.unresolved += 1;
            continue;
        };
        debug!(
            portfolio = portfolio_name,
            holder = holder_field,
            ?strategy,
            "linked portfolio to holder"
        );

        outcome.portfolios.push(Portfolio {
            holder_idx,
            holder_name: holders[holder_idx.0].holder_name.clone(),
            ticker: ticker.to_string(),
            portfolio_name: portfolio_name.to_string(),
            position: numeric::normalize_signed(&row.position),
            percent_out: numeric::normalize(&row.percent_out, true),
            percent_portfolio: row
                .percent_portfolio
                .as_deref()
                .map(|text| numeric::normalize(text, true)),
            latest_change: numeric::normalize_signed(&row.latest_change),
            filing_date: row.filing_date,
            source: row.source.clone(),
            tree_level: row.tree_level,
        });
    }

    outcome
}
