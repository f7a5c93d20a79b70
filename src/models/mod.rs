//! Core data models for the Commission Report Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod report;
mod sale;

pub use report::{CommissionReport, SummaryRow};
pub use sale::{Customer, Product, Sale, SalesPerson};
