//! Report view model types.
//!
//! This module defines the structured output of the report aggregator,
//! consumed by presentation layers to drive a bar chart (labels × values)
//! and a tabular summary, plus the selectable quarter list for filtering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::report::Quarter;

/// A per-salesperson summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    /// The salesperson's display name (`"<firstName> <lastName>"`, or
    /// `"Unknown"` when the sale carried no salesperson).
    pub name: String,
    /// The number of sales credited to this person.
    pub sales_count: u32,
    /// The total commission, rounded to two decimal places at emission.
    pub total_commission: Decimal,
}

/// The complete commission report view model.
///
/// Invariants upheld by [`build_report`](crate::report::build_report):
/// - `quarters` reflects every quarter present in the full input list,
///   sorted ascending, independent of the active filter.
/// - `labels`, `values`, and `summary_rows` have equal lengths and are
///   index-aligned.
/// - `summary_rows` is sorted descending by `total_commission`; ties keep
///   encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionReport {
    /// Every quarter present in the unfiltered sale list, ascending.
    pub quarters: Vec<Quarter>,
    /// Chart labels: display names in summary-row order.
    pub labels: Vec<String>,
    /// Chart values: commission totals, index-aligned with `labels`.
    pub values: Vec<Decimal>,
    /// The per-person summary table.
    pub summary_rows: Vec<SummaryRow>,
}

impl CommissionReport {
    /// Returns an empty report: no quarters, no rows.
    pub fn empty() -> Self {
        Self {
            quarters: Vec::new(),
            labels: Vec::new(),
            values: Vec::new(),
            summary_rows: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_empty_report() {
        let report = CommissionReport::empty();
        assert!(report.quarters.is_empty());
        assert!(report.labels.is_empty());
        assert!(report.values.is_empty());
        assert!(report.summary_rows.is_empty());
    }

    #[test]
    fn test_report_serialization_uses_camel_case() {
        let report = CommissionReport {
            quarters: vec![Quarter::from_str("2024-Q1").unwrap()],
            labels: vec!["Ann Lee".to_string()],
            values: vec![Decimal::from_str("50.00").unwrap()],
            summary_rows: vec![SummaryRow {
                name: "Ann Lee".to_string(),
                sales_count: 1,
                total_commission: Decimal::from_str("50.00").unwrap(),
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["quarters"][0], "2024-Q1");
        assert_eq!(json["summaryRows"][0]["salesCount"], 1);
        assert_eq!(json["summaryRows"][0]["totalCommission"], "50.00");
    }

    #[test]
    fn test_report_roundtrip() {
        let report = CommissionReport {
            quarters: vec![
                Quarter::from_str("2024-Q1").unwrap(),
                Quarter::from_str("2024-Q2").unwrap(),
            ],
            labels: vec!["Ann Lee".to_string()],
            values: vec![Decimal::from_str("75.00").unwrap()],
            summary_rows: vec![SummaryRow {
                name: "Ann Lee".to_string(),
                sales_count: 2,
                total_commission: Decimal::from_str("75.00").unwrap(),
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: CommissionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
