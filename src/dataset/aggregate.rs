// src/dataset/aggregate.rs

use std::collections::HashMap;

use crate::core::numeric;
use crate::ingest::RawRow;

use super::model::Holder;

/// Collapses holder rows into one record per distinct name, preserving
/// first-seen order.
///
/// Repeated rows for the same name add their positions and changes, but
/// the percentage of outstanding shares is the maximum observed, and the
/// classification attributes stay as the first occurrence reported them.
pub fn aggregate_holders(rows: &[RawRow], ticker: &str) -> Vec<Holder> {
    let mut holders: Vec<Holder> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let Some(name) = row.holder_name.as_deref() else {
            continue;
        };

        let position = numeric::normalize_position(&row.position);
        let percent_out = numeric::normalize(&row.percent_out, true);
        let latest_change = numeric::normalize_signed(&row.latest_change);

        match by_name.get(name) {
            Some(&idx) => {
                let holder = &mut holders[idx];
                holder.total_position += position;
                holder.latest_change += latest_change;
                holder.total_percent_out = holder.total_percent_out.max(percent_out);
            }
            None => {
                by_name.insert(name.to_string(), holders.len());
                holders.push(Holder {
                    holder_name: name.to_string(),
                    ticker: ticker.to_string(),
                    total_position: position,
                    total_percent_out: percent_out,
                    latest_change,
                    institution_type: row.institution_type.clone(),
                    country: row.country.clone(),
                    metro_area: row.metro_area.clone(),
                    insider_status: row.insider_status.clone(),
                    tree_level: row.tree_level,
                    filing_date: row.filing_date,
                });
            }
        }
    }

    holders
}
