//! Diesel models for the `saved_searches` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde_json::Value;

use crate::domain::{
    saved_search::{NewSavedSearch as DomainNewSavedSearch, SavedSearch as DomainSavedSearch},
    types::{SavedSearchId, SavedSearchName, TypeConstraintError},
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::saved_searches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SavedSearch {
    pub id: i32,
    pub name: String,
    pub filters: Value,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_searches)]
pub struct NewSavedSearch<'a> {
    pub name: &'a str,
    pub filters: Value,
    pub created_by: &'a str,
}

impl TryFrom<SavedSearch> for DomainSavedSearch {
    type Error = TypeConstraintError;

    fn try_from(search: SavedSearch) -> Result<Self, Self::Error> {
        let filters = match search.filters {
            Value::Object(map) => map,
            _ => Default::default(),
        };
        Ok(Self {
            id: SavedSearchId::new(search.id)?,
            name: SavedSearchName::new(search.name)?,
            filters,
            created_by: search.created_by,
            created_at: search.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewSavedSearch> for NewSavedSearch<'a> {
    fn from(search: &'a DomainNewSavedSearch) -> Self {
        Self {
            name: search.name.as_str(),
            filters: Value::Object(search.filters.clone()),
            created_by: search.created_by.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn non_object_filters_become_empty() {
        let row = SavedSearch {
            id: 1,
            name: "CEOs".into(),
            filters: json!(["not", "an", "object"]),
            created_by: "system".into(),
            created_at: Utc::now().naive_utc(),
        };
        let search = DomainSavedSearch::try_from(row).unwrap();
        assert!(search.filters.is_empty());
    }

    #[test]
    fn object_filters_are_kept() {
        let row = SavedSearch {
            id: 2,
            name: "Fintech".into(),
            filters: json!({"company_industries": ["Fintech"]}),
            created_by: "ana".into(),
            created_at: Utc::now().naive_utc(),
        };
        let search = DomainSavedSearch::try_from(row).unwrap();
        assert_eq!(search.filters["company_industries"], json!(["Fintech"]));
    }
}
