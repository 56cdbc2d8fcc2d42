use diesel::prelude::*;

use crate::{
    domain::stats::DatabaseStats,
    repository::{DieselRepository, StatsReader, errors::RepositoryResult},
    schema::{companies, contacts, lead_lists},
};

impl StatsReader for DieselRepository {
    fn database_stats(&self) -> RepositoryResult<DatabaseStats> {
        let mut conn = self.conn()?;

        let companies = companies::table.count().get_result::<i64>(&mut conn)?;
        let contacts = contacts::table.count().get_result::<i64>(&mut conn)?;
        let campaigns = lead_lists::table.count().get_result::<i64>(&mut conn)?;

        Ok(DatabaseStats {
            companies: companies as usize,
            contacts: contacts as usize,
            campaigns: campaigns as usize,
        })
    }
}
