use serde::Serialize;

use crate::domain::company::Company;
use crate::dto::contact::ContactResponse;

#[derive(Debug, Clone, Serialize)]
pub struct ContactEnrichment {
    pub success: bool,
    pub contact: ContactResponse,
    /// Guessed addresses, best first, when the email is still unknown.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_candidates: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyEnrichment {
    pub success: bool,
    pub company: Company,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BulkEnrichment {
    pub success: bool,
    pub enriched_count: usize,
    pub failed_count: usize,
    pub total_processed: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailCheck {
    pub email: String,
    pub is_valid: bool,
    pub pattern_score: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailValidation {
    pub success: bool,
    pub results: Vec<EmailCheck>,
    pub total_checked: usize,
    pub valid_count: usize,
}
