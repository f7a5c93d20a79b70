//! Quarterly Commission Report Engine
//!
//! This crate computes quarterly commission reports for a bicycle retailer:
//! it classifies sale transactions into calendar quarters, totals per-person
//! sale counts and commissions, and produces chart-ready, deterministically
//! ordered report data.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod report;
