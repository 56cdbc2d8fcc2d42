//! DTOs for the service-level endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::stats::DatabaseStats;

pub const SERVICE_NAME: &str = "leaddb-backend";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Service description served at `/api`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ApiInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatsResponse {
    pub status: &'static str,
    pub stats: DatabaseStats,
}

/// Served at `/` when no frontend build is deployed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Banner {
    pub message: &'static str,
    pub status: &'static str,
    pub frontend: &'static str,
    pub api_docs: &'static str,
}
