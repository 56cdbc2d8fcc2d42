//! Repository implementation for contacts.

use diesel::dsl::count;
use diesel::helper_types::LeftJoinQuerySource;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};

use crate::{
    domain::{
        contact::{Contact, NewContact},
        stats::{ContactStats, LabelCount, top_counts},
        types::{CompanyId, ContactId},
    },
    models::{
        company::Company as DbCompany,
        contact::{Contact as DbContact, NewContact as DbNewContact},
    },
    repository::{
        ContactFilter, ContactListQuery, ContactOrder, ContactReader, ContactWriter,
        DieselRepository,
        company::{companies_with_counts, like_pattern},
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{companies, contacts},
};

const TOP_GROUPS: usize = 10;

type ContactsWithCompany = LeftJoinQuerySource<contacts::table, companies::table>;

/// Attaches each contact's company, with contact counts, to the rows.
pub(crate) fn contacts_with_companies(
    conn: &mut PgConnection,
    rows: Vec<(DbContact, Option<DbCompany>)>,
) -> RepositoryResult<Vec<Contact>> {
    let mut company_rows: Vec<DbCompany> = Vec::new();
    for company in rows.iter().filter_map(|(_, company)| company.as_ref()) {
        if !company_rows.iter().any(|c| c.id == company.id) {
            company_rows.push(company.clone());
        }
    }
    let companies = companies_with_counts(conn, company_rows)?;

    rows.into_iter()
        .map(|(row, _)| -> RepositoryResult<Contact> {
            let mut contact = Contact::try_from(row)?;
            contact.company = contact
                .company_id
                .and_then(|id| companies.iter().find(|c| c.id == id).cloned());
            Ok(contact)
        })
        .collect()
}

/// Column holds a non-blank value.
macro_rules! has_value {
    ($column:expr) => {
        $column.is_not_null().and($column.ne(""))
    };
}

/// Column is missing or blank.
macro_rules! lacks_value {
    ($column:expr) => {
        $column.is_null().or($column.eq(""))
    };
}

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        let mut conn = self.conn()?;

        let row = contacts::table
            .left_join(companies::table)
            .filter(contacts::id.eq(id.get()))
            .first::<(DbContact, Option<DbCompany>)>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(contacts_with_companies(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)> {
        let mut conn = self.conn()?;

        let filter: &ContactFilter = &query.filter;
        let query_builder = || {
            let mut query = contacts::table
                .left_join(companies::table)
                .into_boxed::<Pg>();

            if let Some(search) = &filter.search {
                let pattern = like_pattern(search);
                query = query.filter(
                    contacts::first_name
                        .ilike(pattern.clone())
                        .or(contacts::last_name.ilike(pattern.clone()))
                        .or(contacts::email.ilike(pattern.clone()))
                        .or(contacts::job_title.ilike(pattern.clone()))
                        .or(companies::name.ilike(pattern)),
                );
            }
            if let Some(title) = &filter.job_title {
                query = query.filter(contacts::job_title.ilike(like_pattern(title)));
            }
            if let Some(department) = &filter.department {
                query = query.filter(contacts::department.ilike(like_pattern(department)));
            }
            if let Some(seniority) = &filter.seniority_level {
                query = query.filter(contacts::seniority_level.eq(seniority.clone()));
            }
            if let Some(country) = &filter.country {
                query = query.filter(contacts::location_country.ilike(like_pattern(country)));
            }
            if let Some(state) = &filter.state {
                query = query.filter(contacts::location_state.ilike(like_pattern(state)));
            }
            if let Some(city) = &filter.city {
                query = query.filter(contacts::location_city.ilike(like_pattern(city)));
            }
            if let Some(name) = &filter.company_name {
                query = query.filter(companies::name.ilike(like_pattern(name)));
            }
            if let Some(industry) = &filter.company_industry {
                query = query.filter(companies::industry.ilike(like_pattern(industry)));
            }
            if let Some(size) = &filter.company_size {
                query = query.filter(companies::company_size.eq(size.clone()));
            }
            if let Some(min) = filter.min_score {
                query = query.filter(contacts::lead_score.ge(min));
            }
            if let Some(max) = filter.max_score {
                query = query.filter(contacts::lead_score.le(max));
            }
            match filter.has_email {
                Some(true) => query = query.filter(has_value!(contacts::email)),
                Some(false) => query = query.filter(lacks_value!(contacts::email)),
                None => {}
            }
            match filter.has_phone {
                Some(true) => query = query.filter(has_value!(contacts::phone)),
                Some(false) => query = query.filter(lacks_value!(contacts::phone)),
                None => {}
            }
            if let Some((first, rest)) = filter.job_titles.split_first() {
                let mut any_title: Box<
                    dyn BoxableExpression<ContactsWithCompany, Pg, SqlType = Nullable<Bool>>,
                > = Box::new(contacts::job_title.ilike(like_pattern(first)));
                for title in rest {
                    any_title = Box::new(any_title.or(contacts::job_title.ilike(like_pattern(title))));
                }
                query = query.filter(any_title);
            }
            if !filter.departments.is_empty() {
                query = query.filter(contacts::department.eq_any(filter.departments.clone()));
            }
            if !filter.seniority_levels.is_empty() {
                query = query.filter(contacts::seniority_level.eq_any(filter.seniority_levels.clone()));
            }
            if !filter.countries.is_empty() {
                query = query.filter(contacts::location_country.eq_any(filter.countries.clone()));
            }
            if !filter.company_industries.is_empty() {
                query = query.filter(companies::industry.eq_any(filter.company_industries.clone()));
            }
            if !filter.company_sizes.is_empty() {
                query = query.filter(companies::company_size.eq_any(filter.company_sizes.clone()));
            }

            query
        };

        let total = query_builder()
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = match query.order {
            ContactOrder::Id => query_builder().order(contacts::id.asc()),
            ContactOrder::LeadScore => {
                query_builder().order((contacts::lead_score.desc(), contacts::id.asc()))
            }
        };
        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let rows = items.load::<(DbContact, Option<DbCompany>)>(&mut conn)?;
        let contacts = contacts_with_companies(&mut conn, rows)?;

        Ok((total, contacts))
    }

    fn list_company_emails(&self, company_id: CompanyId) -> RepositoryResult<Vec<String>> {
        let mut conn = self.conn()?;

        let emails = contacts::table
            .filter(contacts::company_id.eq(company_id.get()))
            .filter(has_value!(contacts::email))
            .select(contacts::email)
            .load::<Option<String>>(&mut conn)?;

        Ok(emails.into_iter().flatten().collect())
    }

    fn contact_stats(&self) -> RepositoryResult<ContactStats> {
        let mut conn = self.conn()?;

        let total_contacts = contacts::table.count().get_result::<i64>(&mut conn)? as usize;
        let contacts_with_email = contacts::table
            .filter(has_value!(contacts::email))
            .count()
            .get_result::<i64>(&mut conn)? as usize;
        let contacts_with_phone = contacts::table
            .filter(has_value!(contacts::phone))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let industries = contacts::table
            .inner_join(companies::table)
            .filter(companies::industry.is_not_null())
            .group_by(companies::industry)
            .select((companies::industry, count(contacts::id)))
            .load::<(Option<String>, i64)>(&mut conn)?;

        let job_titles = contacts::table
            .filter(contacts::job_title.is_not_null())
            .group_by(contacts::job_title)
            .select((contacts::job_title, count(contacts::id)))
            .load::<(Option<String>, i64)>(&mut conn)?;

        let to_counts = |rows: Vec<(Option<String>, i64)>| -> Vec<LabelCount> {
            rows.into_iter()
                .filter_map(|(label, n)| {
                    label.map(|label| LabelCount {
                        label,
                        count: n as usize,
                    })
                })
                .collect()
        };

        Ok(ContactStats {
            total_contacts,
            contacts_with_email,
            contacts_with_phone,
            top_industries: top_counts(to_counts(industries), TOP_GROUPS),
            top_job_titles: top_counts(to_counts(job_titles), TOP_GROUPS),
        })
    }
}

pub(crate) fn insert_contacts(
    conn: &mut PgConnection,
    new_contacts: &[NewContact],
) -> RepositoryResult<Vec<Contact>> {
    let insertables: Vec<DbNewContact> = new_contacts.iter().map(Into::into).collect();

    let ids = diesel::insert_into(contacts::table)
        .values(&insertables)
        .returning(contacts::id)
        .get_results::<i32>(conn)?;

    let rows = contacts::table
        .left_join(companies::table)
        .filter(contacts::id.eq_any(ids))
        .order(contacts::id.asc())
        .load::<(DbContact, Option<DbCompany>)>(conn)?;

    contacts_with_companies(conn, rows)
}

pub(crate) fn update_contact_row(
    conn: &mut PgConnection,
    id: ContactId,
    contact: &NewContact,
) -> RepositoryResult<Contact> {
    let changes: DbNewContact = contact.into();
    let updated = diesel::update(contacts::table.find(id.get()))
        .set(&changes)
        .execute(conn)?;
    if updated == 0 {
        return Err(RepositoryError::NotFound);
    }

    let row = contacts::table
        .left_join(companies::table)
        .filter(contacts::id.eq(id.get()))
        .first::<(DbContact, Option<DbCompany>)>(conn)?;

    contacts_with_companies(conn, vec![row])?
        .pop()
        .ok_or(RepositoryError::NotFound)
}

pub(crate) fn delete_contact_row(conn: &mut PgConnection, id: ContactId) -> RepositoryResult<()> {
    let deleted = diesel::delete(contacts::table.find(id.get())).execute(conn)?;
    if deleted == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

impl ContactWriter for DieselRepository {
    fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<Vec<Contact>> {
        insert_contacts(&mut *self.conn()?, new_contacts)
    }

    fn update_contact(&self, id: ContactId, contact: &NewContact) -> RepositoryResult<Contact> {
        update_contact_row(&mut *self.conn()?, id, contact)
    }

    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        delete_contact_row(&mut *self.conn()?, id)
    }
}
