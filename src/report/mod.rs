//! Report computation logic for the Commission Report Engine.
//!
//! This module contains the pure computation core: classifying sale dates
//! into calendar quarters, computing per-sale commissions, and aggregating
//! a sale list into the report view model. Every function here is total
//! over its input domain: malformed dates and missing sub-entities degrade
//! to defaults or exclusion, never to errors.

mod aggregate;
mod commission;
mod quarter;

pub use aggregate::build_report;
pub use commission::commission_of;
pub use quarter::{Quarter, quarter_of};
