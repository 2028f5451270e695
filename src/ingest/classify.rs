//! Tree-depth classification of cleaned rows.

use tracing::debug;

use super::wire::RawRow;

/// Rows at this depth or above describe holders; anything deeper is a
/// portfolio. Fixed convention of the export's hierarchy.
const HOLDER_MAX_TREE_LEVEL: u32 = 1;

/// What a cleaned row represents in the implicit hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Tree level 0 or 1: a top-level ownership entity.
    Holder,
    /// Tree level 2 or deeper: a sub-position under some holder.
    Portfolio,
    /// No resolvable holder name; the row carries nothing usable.
    Discard,
}

/// The outcome of partitioning a batch of rows.
#[derive(Debug, Default)]
pub struct PartitionedRows {
    /// Holder rows in source order, resolved names written back.
    pub holder_rows: Vec<RawRow>,
    /// Portfolio rows in source order, resolved names written back.
    pub portfolio_rows: Vec<RawRow>,
    /// Rows dropped for lacking a resolvable holder name.
    pub discarded: usize,
}

/// Resolves the row's holder name, substituting the unnamed fallback
/// column when the primary cell was a placeholder.
fn resolve_holder_name(row: &RawRow) -> Option<String> {
    row.holder_name
        .clone()
        .or_else(|| row.fallback_name.clone())
}

/// Classifies a single row. The tree-level convention lives here and
/// nowhere else.
pub fn classify(row: &RawRow) -> RowKind {
    if resolve_holder_name(row).is_none() {
        return RowKind::Discard;
    }
    if row.tree_level <= HOLDER_MAX_TREE_LEVEL {
        RowKind::Holder
    } else {
        RowKind::Portfolio
    }
}

/// Partitions rows into holder and portfolio groups, dropping rows
/// without a resolvable holder name.
pub fn partition(rows: Vec<RawRow>) -> PartitionedRows {
    let mut out = PartitionedRows::default();
    for mut row in rows {
        match classify(&row) {
            RowKind::Discard => {
                debug!(tree_level = row.tree_level, "dropping row without holder name");
                out.discarded += 1;
            }
            RowKind::Holder => {
                row.holder_name = resolve_holder_name(&row);
                out.holder_rows.push(row);
            }
            RowKind::Portfolio => {
                row.holder_name = resolve_holder_name(&row);
                out.portfolio_rows.push(row);
            }
        }
    }
    out
}
