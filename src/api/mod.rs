//! HTTP API module for the Commission Report Engine.
//!
//! This module provides the REST endpoint for computing quarterly
//! commission reports from a posted sale list.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ReportResponse};
