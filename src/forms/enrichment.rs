use serde::Deserialize;

use crate::forms::FormError;

/// Body of `POST /api/leads/enrich/bulk`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkEnrichForm {
    #[serde(default)]
    pub contact_ids: Vec<i32>,
}

impl BulkEnrichForm {
    /// The requested ids, in order; at least one is required.
    pub fn ids(self) -> Result<Vec<i32>, FormError> {
        if self.contact_ids.is_empty() {
            return Err(FormError::Missing("contact_ids"));
        }
        Ok(self.contact_ids)
    }
}

/// Body of `POST /api/leads/validate/email`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailValidationForm {
    #[serde(default)]
    pub emails: Vec<String>,
}

impl EmailValidationForm {
    pub fn emails(self) -> Result<Vec<String>, FormError> {
        if self.emails.is_empty() {
            return Err(FormError::Missing("emails"));
        }
        Ok(self.emails)
    }
}
