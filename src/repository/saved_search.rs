use diesel::prelude::*;

use crate::{
    domain::{
        saved_search::{NewSavedSearch, SavedSearch},
        types::SavedSearchId,
    },
    models::saved_search::{NewSavedSearch as DbNewSavedSearch, SavedSearch as DbSavedSearch},
    repository::{
        DieselRepository, SavedSearchReader, SavedSearchWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::saved_searches,
};

impl SavedSearchReader for DieselRepository {
    fn list_saved_searches(&self) -> RepositoryResult<Vec<SavedSearch>> {
        let mut conn = self.conn()?;

        let rows = saved_searches::table
            .order((saved_searches::created_at.desc(), saved_searches::id.desc()))
            .load::<DbSavedSearch>(&mut conn)?;

        rows.into_iter()
            .map(|row| SavedSearch::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl SavedSearchWriter for DieselRepository {
    fn create_saved_search(&self, new_search: &NewSavedSearch) -> RepositoryResult<SavedSearch> {
        let mut conn = self.conn()?;

        let insertable: DbNewSavedSearch = new_search.into();
        let row = diesel::insert_into(saved_searches::table)
            .values(&insertable)
            .get_result::<DbSavedSearch>(&mut conn)?;

        Ok(SavedSearch::try_from(row)?)
    }

    fn delete_saved_search(&self, id: SavedSearchId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(saved_searches::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
