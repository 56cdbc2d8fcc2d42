//! Repository implementation for companies.

use std::collections::HashMap;

use diesel::dsl::count;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};

use crate::{
    domain::{
        company::{Company, NewCompany},
        types::CompanyId,
    },
    models::company::{Company as DbCompany, NewCompany as DbNewCompany},
    repository::{
        CompanyFilter, CompanyListQuery, CompanyReader, CompanyWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{companies, contacts},
};

pub(crate) fn like_pattern(value: &str) -> String {
    format!("%{}%", value.trim())
}

/// Number of contacts per company for the given company ids.
pub(crate) fn company_contact_counts(
    conn: &mut PgConnection,
    company_ids: &[i32],
) -> QueryResult<HashMap<i32, usize>> {
    if company_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = contacts::table
        .filter(contacts::company_id.eq_any(company_ids.to_vec()))
        .group_by(contacts::company_id)
        .select((contacts::company_id, count(contacts::id)))
        .load::<(Option<i32>, i64)>(conn)?;

    Ok(rows
        .into_iter()
        .filter_map(|(id, n)| id.map(|id| (id, n as usize)))
        .collect())
}

/// Converts rows into domain companies with their contact counts attached.
pub(crate) fn companies_with_counts(
    conn: &mut PgConnection,
    rows: Vec<DbCompany>,
) -> RepositoryResult<Vec<Company>> {
    let ids: Vec<i32> = rows.iter().map(|c| c.id).collect();
    let counts = company_contact_counts(conn, &ids)?;

    rows.into_iter()
        .map(|row| -> RepositoryResult<Company> {
            let contact_count = counts.get(&row.id).copied().unwrap_or(0);
            let mut company = Company::try_from(row)?;
            company.contact_count = contact_count;
            Ok(company)
        })
        .collect()
}

fn filtered_companies(filter: &CompanyFilter) -> companies::BoxedQuery<'static, Pg> {
    let mut query = companies::table.into_boxed::<Pg>();

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        query = query.filter(
            companies::name
                .ilike(pattern.clone())
                .or(companies::domain.ilike(pattern.clone()))
                .or(companies::description.ilike(pattern)),
        );
    }
    if let Some(industry) = &filter.industry {
        query = query.filter(companies::industry.ilike(like_pattern(industry)));
    }
    if let Some(size) = &filter.company_size {
        query = query.filter(companies::company_size.eq(size.clone()));
    }
    if let Some(country) = &filter.country {
        query = query.filter(companies::location_country.ilike(like_pattern(country)));
    }
    if let Some(state) = &filter.state {
        query = query.filter(companies::location_state.ilike(like_pattern(state)));
    }
    if let Some(city) = &filter.city {
        query = query.filter(companies::location_city.ilike(like_pattern(city)));
    }
    if let Some(status) = &filter.funding_status {
        query = query.filter(companies::funding_status.ilike(like_pattern(status)));
    }
    if let Some(year) = filter.founded_after {
        query = query.filter(companies::founded_year.ge(year));
    }
    if let Some(year) = filter.founded_before {
        query = query.filter(companies::founded_year.le(year));
    }
    if let Some(technology) = &filter.technology {
        query = query.filter(companies::technology_stack.ilike(like_pattern(technology)));
    }
    if !filter.industries.is_empty() {
        query = query.filter(companies::industry.eq_any(filter.industries.clone()));
    }
    if !filter.company_sizes.is_empty() {
        query = query.filter(companies::company_size.eq_any(filter.company_sizes.clone()));
    }
    if !filter.countries.is_empty() {
        query = query.filter(companies::location_country.eq_any(filter.countries.clone()));
    }
    if !filter.funding_statuses.is_empty() {
        query = query.filter(companies::funding_status.eq_any(filter.funding_statuses.clone()));
    }
    if let Some((first, rest)) = filter.technologies.split_first() {
        let mut any_technology: Box<
            dyn BoxableExpression<companies::table, Pg, SqlType = Nullable<Bool>>,
        > = Box::new(companies::technology_stack.ilike(like_pattern(first)));
        for technology in rest {
            any_technology = Box::new(
                any_technology.or(companies::technology_stack.ilike(like_pattern(technology))),
            );
        }
        query = query.filter(any_technology);
    }

    query
}

impl CompanyReader for DieselRepository {
    fn get_company_by_id(&self, id: CompanyId) -> RepositoryResult<Option<Company>> {
        let mut conn = self.conn()?;

        let row = companies::table
            .find(id.get())
            .first::<DbCompany>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(companies_with_counts(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)> {
        let mut conn = self.conn()?;

        let total = filtered_companies(&query.filter)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered_companies(&query.filter).order(companies::id.asc());
        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let rows = items.load::<DbCompany>(&mut conn)?;
        let companies = companies_with_counts(&mut conn, rows)?;

        Ok((total, companies))
    }
}

pub(crate) fn insert_companies(
    conn: &mut PgConnection,
    new_companies: &[NewCompany],
) -> RepositoryResult<Vec<Company>> {
    let insertables: Vec<DbNewCompany> = new_companies.iter().map(Into::into).collect();

    // New companies have no contacts, so counts stay at zero.
    let rows = diesel::insert_into(companies::table)
        .values(&insertables)
        .get_results::<DbCompany>(conn)?;

    rows.into_iter()
        .map(|row| Company::try_from(row).map_err(RepositoryError::from))
        .collect()
}

pub(crate) fn update_company_row(
    conn: &mut PgConnection,
    id: CompanyId,
    company: &NewCompany,
) -> RepositoryResult<Company> {
    let changes: DbNewCompany = company.into();
    let row = diesel::update(companies::table.find(id.get()))
        .set(&changes)
        .get_result::<DbCompany>(conn)?;

    companies_with_counts(conn, vec![row])?
        .pop()
        .ok_or(RepositoryError::NotFound)
}

pub(crate) fn delete_company_row(conn: &mut PgConnection, id: CompanyId) -> RepositoryResult<()> {
    let deleted = diesel::delete(companies::table.find(id.get())).execute(conn)?;
    if deleted == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

impl CompanyWriter for DieselRepository {
    fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>> {
        insert_companies(&mut *self.conn()?, new_companies)
    }

    fn update_company(&self, id: CompanyId, company: &NewCompany) -> RepositoryResult<Company> {
        update_company_row(&mut *self.conn()?, id, company)
    }

    fn delete_company(&self, id: CompanyId) -> RepositoryResult<()> {
        delete_company_row(&mut *self.conn()?, id)
    }
}
