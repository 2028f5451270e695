// src/ingest/wire.rs

use chrono::NaiveDate;
use csv::StringRecord;

use crate::core::{OwnershipError, numeric};

/// Markers the export uses for "no value" in text cells.
const PLACEHOLDERS: [&str; 4] = ["-", "--", "nan", "N/A"];

pub(crate) fn is_placeholder(text: &str) -> bool {
    text.is_empty() || PLACEHOLDERS.contains(&text)
}

/// One parsed line of the export.
///
/// Numeric cells stay textual here; the stage that consumes them runs them
/// through the normalizer. Raw rows are ephemeral: produced once by the
/// reader, consumed by classification.
#[derive(Debug, Clone)]
pub struct RawRow {
    /// The primary holder-name cell, `None` when it was a placeholder.
    pub holder_name: Option<String>,
    /// The export's unnamed fallback-name column.
    pub fallback_name: Option<String>,
    /// The portfolio name, present on sub-position rows.
    pub portfolio_name: Option<String>,
    /// Textual share count.
    pub position: String,
    /// Textual signed change in shares.
    pub latest_change: String,
    /// Textual percent of outstanding shares.
    pub percent_out: String,
    /// Textual percent of the holder's portfolio; `None` when the cell was
    /// absent.
    pub percent_portfolio: Option<String>,
    /// Filing date, already decoded from the export's `DD.MM.YYYY` form.
    pub filing_date: Option<NaiveDate>,
    /// Filing source attribute.
    pub source: Option<String>,
    /// Insider status attribute.
    pub insider_status: Option<String>,
    /// Institution classification attribute.
    pub institution_type: Option<String>,
    /// Metro-area attribute.
    pub metro_area: Option<String>,
    /// Country attribute.
    pub country: Option<String>,
    /// Depth of the row in the implicit hierarchy. Unparseable depths
    /// coerce to 0.
    pub tree_level: u32,
}

/// Column positions resolved from the header row.
///
/// Headers are matched by trimmed, case-insensitive name. The designated
/// fallback-name column is the first column with an empty header (the
/// export leaves it unnamed). `Holder Name` and `Tree Level` are required;
/// everything else degrades to empty cells when missing.
#[derive(Debug)]
pub(crate) struct ColumnMap {
    holder_name: usize,
    fallback_name: Option<usize>,
    portfolio_name: Option<usize>,
    position: Option<usize>,
    latest_change: Option<usize>,
    percent_out: Option<usize>,
    percent_portfolio: Option<usize>,
    filing_date: Option<usize>,
    source: Option<usize>,
    insider_status: Option<usize>,
    institution_type: Option<usize>,
    metro_area: Option<usize>,
    country: Option<usize>,
    tree_level: usize,
}

impl ColumnMap {
    pub(crate) fn from_headers(headers: &StringRecord) -> Result<Self, OwnershipError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let holder_name = find("Holder Name")
            .ok_or_else(|| OwnershipError::Data("missing 'Holder Name' column".into()))?;
        let tree_level = find("Tree Level")
            .ok_or_else(|| OwnershipError::Data("missing 'Tree Level' column".into()))?;

        Ok(Self {
            holder_name,
            fallback_name: headers.iter().position(|h| h.trim().is_empty()),
            portfolio_name: find("Portfolio Name"),
            position: find("Position"),
            latest_change: find("Latest Chg"),
            percent_out: find("% Out"),
            percent_portfolio: find("% Portfolio"),
            filing_date: find("Filing Date"),
            source: find("Source"),
            insider_status: find("Insider Status"),
            institution_type: find("Institution Type"),
            metro_area: find("Metro Area"),
            country: find("Country"),
            tree_level,
        })
    }

    pub(crate) fn row(&self, record: &StringRecord) -> RawRow {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").trim();

        let percent_portfolio = {
            let raw = cell(self.percent_portfolio);
            if raw.is_empty() {
                None
            } else {
                Some(raw.to_string())
            }
        };

        RawRow {
            holder_name: clean_text(cell(Some(self.holder_name))),
            fallback_name: clean_text(cell(self.fallback_name)),
            portfolio_name: clean_text(cell(self.portfolio_name)),
            position: cell(self.position).to_string(),
            latest_change: cell(self.latest_change).to_string(),
            percent_out: cell(self.percent_out).to_string(),
            percent_portfolio,
            filing_date: parse_filing_date(cell(self.filing_date)),
            source: clean_text(cell(self.source)),
            insider_status: clean_text(cell(self.insider_status)),
            institution_type: clean_text(cell(self.institution_type)),
            metro_area: clean_text(cell(self.metro_area)),
            country: clean_text(cell(self.country)),
            tree_level: (numeric::normalize(cell(Some(self.tree_level)), false) as i64).max(0)
                as u32,
        }
    }
}

fn clean_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Decodes the export's `DD.MM.YYYY` filing dates. Placeholders and
/// unparseable input are `None`.
pub(crate) fn parse_filing_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%d.%m.%Y").ok()
}
