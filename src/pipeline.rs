//! End-to-end orchestration of the transform.
//!
//! One run reads the whole export into memory, then applies
//! normalize → classify → aggregate → link → assemble sequentially, with
//! no suspension points. Row-level problems recover in place; only a
//! failed read aborts.

use std::path::Path;

use tracing::info;

use crate::core::OwnershipError;
use crate::dataset::{OwnershipDataset, aggregate_holders, assemble, link_portfolios};
use crate::ingest::{self, RawRow, partition};

/// A builder for running the full transformation over one export.
#[derive(Debug, Clone)]
pub struct TransformBuilder {
    ticker: String,
    company_name: String,
    delimiter: u8,
    skip_lines: usize,
}

impl TransformBuilder {
    /// Creates a builder for the given instrument ticker.
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            company_name: String::new(),
            delimiter: ingest::DEFAULT_DELIMITER,
            skip_lines: ingest::DEFAULT_SKIP_LINES,
        }
    }

    /// Sets the company display name carried into the dataset.
    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = name.into();
        self
    }

    /// Overrides the field delimiter. Default: `;`.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Overrides how many metadata lines precede the header row.
    /// Default: 12.
    pub fn skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Reads and transforms the export at `path`.
    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<OwnershipDataset, OwnershipError> {
        let rows = ingest::read_report(path, self.delimiter, self.skip_lines)?;
        Ok(self.transform(rows))
    }

    /// Transforms an export body that has already been read.
    pub fn run_str(&self, content: &str) -> Result<OwnershipDataset, OwnershipError> {
        let rows = ingest::parse_report(content, self.delimiter, self.skip_lines)?;
        Ok(self.transform(rows))
    }

    fn transform(&self, rows: Vec<RawRow>) -> OwnershipDataset {
        info!(rows = rows.len(), ticker = %self.ticker, "parsed export");

        let parts = partition(rows);
        info!(
            holder_rows = parts.holder_rows.len(),
            portfolio_rows = parts.portfolio_rows.len(),
            discarded = parts.discarded,
            "classified rows"
        );

        let holders = aggregate_holders(&parts.holder_rows, &self.ticker);
        let linked = link_portfolios(&parts.portfolio_rows, &holders, &self.ticker);
        if linked.unresolved > 0 {
            info!(
                unresolved = linked.unresolved,
                "portfolio rows dropped without a holder"
            );
        }

        let dataset = assemble::assemble(&self.ticker, &self.company_name, holders, linked);
        info!(
            holders = dataset.summary.total_holders,
            portfolios = dataset.summary.total_portfolios,
            total_shares = dataset.summary.total_shares,
            "assembled dataset"
        );
        dataset
    }
}
