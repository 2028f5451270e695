// src/dataset/model.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::OwnershipError;

/// Position of a holder in the assembly arena.
///
/// Stable only within one pipeline run. Anything crossing the transport
/// boundary must re-resolve holders by name instead; the store never sees
/// this index as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolderIdx(pub usize);

/// An aggregated top-level ownership entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holder {
    /// The holder's reported name; natural key together with `ticker`.
    pub holder_name: String,
    /// The instrument this record belongs to.
    pub ticker: String,
    /// Total shares held, summed across the holder's rows.
    pub total_position: u64,
    /// Percent of outstanding shares, clamped to `[0, 100]`. Duplicate
    /// rows contribute their maximum, never a sum: they are the same stake
    /// observed at different tree depths.
    pub total_percent_out: f64,
    /// Net reported change in shares, summed across the holder's rows.
    pub latest_change: i64,
    /// Institution classification, when the export carries one.
    pub institution_type: Option<String>,
    /// Country attribute, when present.
    pub country: Option<String>,
    /// Metro-area attribute, when present.
    pub metro_area: Option<String>,
    /// Insider status attribute, when present.
    pub insider_status: Option<String>,
    /// Depth at which the holder first appeared in the source tree.
    pub tree_level: u32,
    /// Filing date from the holder's first row, when parseable.
    pub filing_date: Option<NaiveDate>,
}

/// A sub-position nested beneath exactly one [`Holder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Arena index of the owning holder. Valid only inside this dataset;
    /// the transport re-resolves by `holder_name`.
    pub holder_idx: HolderIdx,
    /// Name of the owning holder, carried for re-linking.
    pub holder_name: String,
    /// The instrument this record belongs to.
    pub ticker: String,
    /// The portfolio or fund name.
    pub portfolio_name: String,
    /// Shares held by this portfolio.
    pub position: i64,
    /// Percent of outstanding shares, clamped to `[0, 100]`.
    pub percent_out: f64,
    /// Share of the holder's total portfolio, clamped to `[0, 100]`.
    /// `None` when the cell was absent, which is distinct from a reported
    /// zero.
    pub percent_portfolio: Option<f64>,
    /// Net reported change in shares.
    pub latest_change: i64,
    /// Filing date, when parseable.
    pub filing_date: Option<NaiveDate>,
    /// Filing source attribute, when present.
    pub source: Option<String>,
    /// Depth of the row in the source tree.
    pub tree_level: u32,
}

/// Aggregate statistics over an assembled dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of distinct holders.
    pub total_holders: u64,
    /// Number of resolved portfolios.
    pub total_portfolios: u64,
    /// Sum of holder positions.
    pub total_shares: u64,
    /// Sum of holder percentages. Can legitimately exceed 100 across
    /// holders and is not clamped at this level.
    pub total_percent_out: f64,
}

/// The normalized, hierarchically linked output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipDataset {
    /// The instrument the export was processed for.
    pub ticker: String,
    /// Display name of the company.
    pub company_name: String,
    /// When this dataset was assembled.
    pub generated_at: DateTime<Utc>,
    /// Holders in first-seen order.
    pub holders: Vec<Holder>,
    /// Resolved portfolios in source order.
    pub portfolios: Vec<Portfolio>,
    /// Aggregate statistics.
    pub summary: DatasetSummary,
}

impl OwnershipDataset {
    /// Serializes the dataset as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, OwnershipError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a dataset back from its JSON form.
    pub fn from_json(text: &str) -> Result<Self, OwnershipError> {
        Ok(serde_json::from_str(text)?)
    }
}
