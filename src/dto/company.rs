use serde::Serialize;

use crate::domain::company::Company;
use crate::forms::company::CompanySearchFilters;
use crate::pagination::PageMeta;

/// One page of companies.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyPage {
    pub companies: Vec<Company>,
    #[serde(flatten)]
    pub meta: PageMeta,
    /// Echo of the filters of an advanced search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<CompanySearchFilters>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkCompaniesResponse {
    pub message: String,
    pub companies: Vec<Company>,
}
