//! Request types for the Commission Report Engine API.
//!
//! This module defines the JSON request structure for the `/report`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::Sale;
use crate::report::Quarter;

/// Request body for the `/report` endpoint.
///
/// Contains the sale list to aggregate and the optional quarter filter.
/// Both fields may be omitted: a missing sale list is treated as empty and
/// a missing filter means "all quarters".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    /// The sale records to aggregate.
    #[serde(default)]
    pub sales: Vec<Sale>,
    /// The quarter to filter by, e.g. `"2024-Q1"`. Empty or absent means
    /// no filter.
    #[serde(default)]
    pub quarter: Option<String>,
}

impl ReportRequest {
    /// Resolves the raw filter string into a typed quarter.
    ///
    /// Absent, empty, and whitespace-only values mean "no filter"; any
    /// other value must parse as a quarter label.
    pub fn quarter_filter(&self) -> EngineResult<Option<Quarter>> {
        match self.quarter.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}
