use crate::domain::saved_search::{NewSavedSearch, SavedSearch};
use crate::domain::types::SavedSearchId;
use crate::forms::saved_search::SavedSearchForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{SavedSearchReader, SavedSearchWriter};
use crate::services::{ServiceError, ServiceResult};

/// All saved searches, newest first.
pub fn list_saved_searches<R>(repo: &R) -> ServiceResult<Vec<SavedSearch>>
where
    R: SavedSearchReader + ?Sized,
{
    let searches = repo.list_saved_searches().map_err(|err| {
        log::error!("Failed to list saved searches: {err}");
        err
    })?;
    Ok(searches)
}

pub fn create_saved_search<R>(repo: &R, form: SavedSearchForm) -> ServiceResult<SavedSearch>
where
    R: SavedSearchWriter + ?Sized,
{
    let new_search = NewSavedSearch::try_from(form)?;
    let search = repo.create_saved_search(&new_search).map_err(|err| {
        log::error!("Failed to save search: {err}");
        err
    })?;
    Ok(search)
}

pub fn delete_saved_search<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: SavedSearchWriter + ?Sized,
{
    let id = SavedSearchId::new(id).map_err(|_| ServiceError::not_found("Saved search"))?;

    repo.delete_saved_search(id).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::not_found("Saved search"),
        err => {
            log::error!("Failed to delete saved search {id}: {err}");
            ServiceError::from(err)
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::types::SavedSearchName;
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures;

    #[test]
    fn create_stores_filters() {
        let mut repo = MockRepository::new();
        repo.expect_create_saved_search()
            .withf(|search| search.filters.contains_key("seniority_levels"))
            .returning(|search| {
                Ok(SavedSearch {
                    id: SavedSearchId::new(1).unwrap(),
                    name: search.name.clone(),
                    filters: search.filters.clone(),
                    created_by: search.created_by.clone(),
                    created_at: fixtures::timestamp(),
                })
            });

        let form: SavedSearchForm = serde_json::from_value(json!({
            "name": "Executives",
            "filters": {"seniority_levels": ["C-Level"]}
        }))
        .unwrap();
        let search = create_saved_search(&repo, form).unwrap();
        assert_eq!(search.name, SavedSearchName::new("Executives").unwrap());
        assert_eq!(search.created_by, "system");
    }

    #[test]
    fn delete_missing_search_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_saved_search()
            .returning(|_| Err(RepositoryError::NotFound));

        let err = delete_saved_search(&repo, 3).unwrap_err();
        assert_eq!(err.to_string(), "Saved search not found");
    }
}
