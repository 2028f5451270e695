use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Row shapes for the store's REST surface.

/// A holder row as returned by a select or an insert representation.
#[derive(Debug, Deserialize)]
pub(crate) struct HolderRow {
    pub(crate) id: i64,
}

/// The holder shape the store accepts for inserts and updates.
#[derive(Debug, Serialize)]
pub(crate) struct HolderRecord<'a> {
    pub(crate) holder_name: &'a str,
    pub(crate) ticker: &'a str,
    pub(crate) total_position: u64,
    pub(crate) total_percent_out: f64,
    pub(crate) latest_change: i64,
    pub(crate) institution_type: Option<&'a str>,
    pub(crate) country: Option<&'a str>,
    pub(crate) metro_area: Option<&'a str>,
    pub(crate) insider_status: Option<&'a str>,
    pub(crate) tree_level: u32,
    pub(crate) filing_date: Option<NaiveDate>,
}

/// The portfolio shape the store accepts for inserts.
#[derive(Debug, Serialize)]
pub(crate) struct PortfolioRecord<'a> {
    pub(crate) holder_id: i64,
    pub(crate) ticker: &'a str,
    pub(crate) portfolio_name: &'a str,
    pub(crate) position: i64,
    pub(crate) percent_out: f64,
    pub(crate) percent_portfolio: Option<f64>,
    pub(crate) latest_change: i64,
    pub(crate) filing_date: Option<NaiveDate>,
    pub(crate) source: Option<&'a str>,
    pub(crate) tree_level: u32,
}
