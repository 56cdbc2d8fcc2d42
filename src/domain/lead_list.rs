use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{LeadListId, LeadListName};

/// Default author recorded when a request does not name one.
pub const DEFAULT_CREATED_BY: &str = "system";

/// Named collection of contacts assembled for a campaign.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LeadList {
    pub id: LeadListId,
    pub name: LeadListName,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub contact_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewLeadList {
    pub name: LeadListName,
    pub description: Option<String>,
    pub created_by: String,
}

impl NewLeadList {
    #[must_use]
    pub fn new(name: LeadListName, description: Option<String>, created_by: Option<String>) -> Self {
        Self {
            name,
            description,
            created_by: created_by
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_CREATED_BY.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateLeadList {
    pub name: LeadListName,
    pub description: Option<String>,
}
