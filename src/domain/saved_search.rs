use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::types::{SavedSearchId, SavedSearchName};

/// Named set of search filters that can be re-applied later.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SavedSearch {
    pub id: SavedSearchId,
    pub name: SavedSearchName,
    pub filters: Map<String, Value>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewSavedSearch {
    pub name: SavedSearchName,
    pub filters: Map<String, Value>,
    pub created_by: String,
}
