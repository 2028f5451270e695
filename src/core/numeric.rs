//! Locale-tolerant parsing of the export's textual numbers.
//!
//! The source mixes US (`1,234.56`) and European (`1.234,56`) conventions,
//! sometimes within a single file, and uses `-` for empty cells. Parsing
//! never aborts a row: unparseable input coerces to zero and leaves a
//! `debug` breadcrumb.

use tracing::{debug, warn};

/// Parses a textual number from the export into an `f64`.
///
/// Empty and `-` cells are zero. A trailing `%` is stripped. When both
/// separators appear, whichever occurs last in the string is the decimal
/// mark and the other is removed. A lone comma is a decimal mark only when
/// splitting on it yields exactly two parts with at most two fractional
/// characters (`6,39`); otherwise it is a thousands separator (`1,234`).
///
/// With `is_percentage`, the parsed value is clamped to `[0, 100]`;
/// engaging the clamp emits a warning carrying the raw text.
pub fn normalize(text: &str, is_percentage: bool) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return 0.0;
    }

    let stripped = trimmed.replace('%', "");
    let cleaned = stripped.trim();

    let canonical = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) => {
            let parts: Vec<&str> = cleaned.split(',').collect();
            if parts.len() == 2 && parts[1].len() <= 2 {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        _ => cleaned.to_string(),
    };

    let parsed = match canonical.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!(raw = text, "unparseable numeric field, coercing to 0");
            return 0.0;
        }
    };

    if is_percentage {
        let clamped = parsed.clamp(0.0, 100.0);
        if clamped != parsed {
            warn!(raw = text, parsed, "percentage outside [0, 100], capping");
        }
        clamped
    } else {
        parsed
    }
}

/// Parses a share count: truncated toward zero, floored at zero.
pub fn normalize_position(text: &str) -> u64 {
    (normalize(text, false) as i64).max(0) as u64
}

/// Parses a signed integer field such as `Latest Chg`.
pub fn normalize_signed(text: &str) -> i64 {
    normalize(text, false) as i64
}
