//! Report aggregation logic.
//!
//! This module turns a raw sale list plus an optional quarter filter into
//! the report view model: the set of known quarters, per-salesperson sale
//! counts and commission totals, and chart-ready label/value series.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;

use crate::models::{CommissionReport, Sale, SummaryRow};
use crate::report::{Quarter, commission_of, quarter_of};

/// A per-salesperson running total, kept at full precision until emission.
struct PersonTotals {
    name: String,
    sales_count: u32,
    total_commission: Decimal,
}

/// Builds the commission report for a sale list.
///
/// A single pass over the sales classifies each record's quarter, records
/// it into the quarter set, and, when it matches the filter, adds the
/// record to its salesperson's accumulator. Records whose date does not
/// classify are skipped entirely: they appear in neither the quarter set
/// nor any accumulator. The quarter set always reflects the full input
/// list; the filter only restricts which records are aggregated.
///
/// Output ordering is deterministic: `quarters` ascending, `summary_rows`
/// descending by rounded commission total with ties keeping encounter
/// order, and `labels`/`values` index-aligned projections of the rows.
///
/// This function is pure and never fails; missing sub-entities degrade to
/// defaults (zero commission, the `"Unknown"` display name).
///
/// # Example
///
/// ```
/// use commission_engine::report::build_report;
///
/// let report = build_report(&[], None);
/// assert!(report.quarters.is_empty());
/// assert!(report.summary_rows.is_empty());
/// ```
pub fn build_report(sales: &[Sale], quarter_filter: Option<Quarter>) -> CommissionReport {
    let mut quarters: BTreeSet<Quarter> = BTreeSet::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<PersonTotals> = Vec::new();

    for sale in sales {
        let Some(quarter) = quarter_of(sale.date.as_deref()) else {
            continue;
        };

        // Quarters stay discoverable regardless of the active filter.
        quarters.insert(quarter);

        if let Some(filter) = quarter_filter {
            if quarter != filter {
                continue;
            }
        }

        let name = sale
            .sales_person
            .as_ref()
            .map(|p| p.display_name())
            .unwrap_or_else(|| "Unknown".to_string());

        let idx = match row_index.get(&name) {
            Some(&idx) => idx,
            None => {
                let idx = totals.len();
                row_index.insert(name.clone(), idx);
                totals.push(PersonTotals {
                    name,
                    sales_count: 0,
                    total_commission: Decimal::ZERO,
                });
                idx
            }
        };

        totals[idx].sales_count += 1;
        totals[idx].total_commission += commission_of(sale);
    }

    let mut summary_rows: Vec<SummaryRow> = totals
        .into_iter()
        .map(|t| {
            // Round once per row, then pin the scale so totals always
            // render with two fractional digits.
            let mut total = t.total_commission.round_dp(2);
            total.rescale(2);
            SummaryRow {
                name: t.name,
                sales_count: t.sales_count,
                total_commission: total,
            }
        })
        .collect();

    // Stable sort keeps encounter order for equal totals.
    summary_rows.sort_by(|a, b| b.total_commission.cmp(&a.total_commission));

    CommissionReport {
        quarters: quarters.into_iter().collect(),
        labels: summary_rows.iter().map(|r| r.name.clone()).collect(),
        values: summary_rows.iter().map(|r| r.total_commission).collect(),
        summary_rows,
    }
}
