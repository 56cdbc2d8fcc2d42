use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::lead_list::DEFAULT_CREATED_BY;
use crate::domain::saved_search::NewSavedSearch;
use crate::domain::types::{SavedSearchName, normalize_optional};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for saving a search.
pub struct SavedSearchForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Filter object; `null` or missing is stored as `{}`.
    #[serde(default)]
    pub filters: Option<Map<String, Value>>,
    #[validate(length(max = 100))]
    pub created_by: Option<String>,
}

impl TryFrom<SavedSearchForm> for NewSavedSearch {
    type Error = FormError;

    fn try_from(form: SavedSearchForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(Self {
            name: SavedSearchName::new(form.name)?,
            filters: form.filters.unwrap_or_default(),
            created_by: normalize_optional(form.created_by)
                .unwrap_or_else(|| DEFAULT_CREATED_BY.to_string()),
        })
    }
}
