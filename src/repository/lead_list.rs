//! Repository implementation for lead lists and list membership.

use std::collections::HashMap;

use diesel::dsl::count;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::{
    domain::{
        contact::Contact,
        lead_list::{LeadList, NewLeadList, UpdateLeadList},
        stats::{LabelCount, LeadListStats, top_counts},
        types::{ContactId, LeadListId},
    },
    models::{
        company::Company as DbCompany,
        contact::Contact as DbContact,
        lead_list::{
            LeadList as DbLeadList, NewLeadList as DbNewLeadList,
            NewLeadListContact as DbNewLeadListContact, UpdateLeadList as DbUpdateLeadList,
        },
    },
    repository::{
        DieselRepository, LeadListReader, LeadListWriter, Pagination,
        contact::contacts_with_companies,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{companies, contacts, lead_list_contacts, lead_lists},
};

const TOP_LISTS: usize = 10;

fn list_contact_counts(
    conn: &mut PgConnection,
    list_ids: &[i32],
) -> QueryResult<HashMap<i32, usize>> {
    if list_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = lead_list_contacts::table
        .filter(lead_list_contacts::list_id.eq_any(list_ids.to_vec()))
        .group_by(lead_list_contacts::list_id)
        .select((lead_list_contacts::list_id, count(lead_list_contacts::id)))
        .load::<(i32, i64)>(conn)?;

    Ok(rows.into_iter().map(|(id, n)| (id, n as usize)).collect())
}

fn lists_with_counts(
    conn: &mut PgConnection,
    rows: Vec<DbLeadList>,
) -> RepositoryResult<Vec<LeadList>> {
    let ids: Vec<i32> = rows.iter().map(|l| l.id).collect();
    let counts = list_contact_counts(conn, &ids)?;

    rows.into_iter()
        .map(|row| -> RepositoryResult<LeadList> {
            let contact_count = counts.get(&row.id).copied().unwrap_or(0);
            let mut list = LeadList::try_from(row)?;
            list.contact_count = contact_count;
            Ok(list)
        })
        .collect()
}

impl LeadListReader for DieselRepository {
    fn get_lead_list_by_id(&self, id: LeadListId) -> RepositoryResult<Option<LeadList>> {
        let mut conn = self.conn()?;

        let row = lead_lists::table
            .find(id.get())
            .first::<DbLeadList>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(lists_with_counts(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }

    fn list_lead_lists(
        &self,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<LeadList>)> {
        let mut conn = self.conn()?;

        let total = lead_lists::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = lead_lists::table
            .order(lead_lists::created_at.desc())
            .then_order_by(lead_lists::id.desc())
            .into_boxed();
        if let Some(pagination) = &pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let rows = items.load::<DbLeadList>(&mut conn)?;
        let lists = lists_with_counts(&mut conn, rows)?;

        Ok((total, lists))
    }

    fn list_lead_list_contacts(
        &self,
        list_id: LeadListId,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<Contact>)> {
        let mut conn = self.conn()?;

        let total = lead_list_contacts::table
            .filter(lead_list_contacts::list_id.eq(list_id.get()))
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = lead_list_contacts::table
            .inner_join(contacts::table.left_join(companies::table))
            .filter(lead_list_contacts::list_id.eq(list_id.get()))
            .order((
                lead_list_contacts::added_at.desc(),
                lead_list_contacts::id.desc(),
            ))
            .select((
                contacts::all_columns,
                companies::all_columns.nullable(),
            ))
            .into_boxed();
        if let Some(pagination) = &pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let rows = items.load::<(DbContact, Option<DbCompany>)>(&mut conn)?;
        let contacts = contacts_with_companies(&mut conn, rows)?;

        Ok((total, contacts))
    }

    fn lead_list_stats(&self) -> RepositoryResult<LeadListStats> {
        let mut conn = self.conn()?;

        let total_lists = lead_lists::table.count().get_result::<i64>(&mut conn)? as usize;
        let total_list_contacts = lead_list_contacts::table
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let groups = lead_lists::table
            .inner_join(lead_list_contacts::table)
            .group_by((lead_lists::id, lead_lists::name))
            .select((lead_lists::name, count(lead_list_contacts::id)))
            .load::<(String, i64)>(&mut conn)?
            .into_iter()
            .map(|(label, n)| LabelCount {
                label,
                count: n as usize,
            })
            .collect();

        Ok(LeadListStats {
            total_lists,
            total_list_contacts,
            top_lists: top_counts(groups, TOP_LISTS),
        })
    }
}

pub(crate) fn insert_lead_list(
    conn: &mut PgConnection,
    new_list: &NewLeadList,
) -> RepositoryResult<LeadList> {
    let insertable: DbNewLeadList = new_list.into();
    let row = diesel::insert_into(lead_lists::table)
        .values(&insertable)
        .get_result::<DbLeadList>(conn)?;

    Ok(LeadList::try_from(row)?)
}

pub(crate) fn update_lead_list_row(
    conn: &mut PgConnection,
    id: LeadListId,
    updates: &UpdateLeadList,
) -> RepositoryResult<LeadList> {
    let changes: DbUpdateLeadList = updates.into();
    let row = diesel::update(lead_lists::table.find(id.get()))
        .set(&changes)
        .get_result::<DbLeadList>(conn)?;

    lists_with_counts(conn, vec![row])?
        .pop()
        .ok_or(RepositoryError::NotFound)
}

pub(crate) fn delete_lead_list_row(conn: &mut PgConnection, id: LeadListId) -> RepositoryResult<()> {
    let deleted = diesel::delete(lead_lists::table.find(id.get())).execute(conn)?;
    if deleted == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

pub(crate) fn add_list_members(
    conn: &mut PgConnection,
    list_id: LeadListId,
    contact_ids: &[ContactId],
) -> RepositoryResult<usize> {
    conn.transaction::<_, RepositoryError, _>(|conn| {
        let requested: Vec<i32> = contact_ids.iter().map(|id| id.get()).collect();

        // Unknown contact ids are skipped rather than rejected.
        let existing = contacts::table
            .filter(contacts::id.eq_any(requested))
            .select(contacts::id)
            .order(contacts::id.asc())
            .load::<i32>(conn)?;

        if existing.is_empty() {
            return Ok(0);
        }

        let memberships: Vec<DbNewLeadListContact> = existing
            .into_iter()
            .map(|contact_id| DbNewLeadListContact {
                list_id: list_id.get(),
                contact_id,
            })
            .collect();

        let added = diesel::insert_into(lead_list_contacts::table)
            .values(&memberships)
            .on_conflict((lead_list_contacts::list_id, lead_list_contacts::contact_id))
            .do_nothing()
            .execute(conn)?;

        diesel::update(lead_lists::table.find(list_id.get()))
            .set(lead_lists::updated_at.eq(diesel::dsl::now))
            .execute(conn)?;

        Ok(added)
    })
}

pub(crate) fn remove_list_members(
    conn: &mut PgConnection,
    list_id: LeadListId,
    contact_ids: &[ContactId],
) -> RepositoryResult<usize> {
    let ids: Vec<i32> = contact_ids.iter().map(|id| id.get()).collect();
    let removed = diesel::delete(
        lead_list_contacts::table
            .filter(lead_list_contacts::list_id.eq(list_id.get()))
            .filter(lead_list_contacts::contact_id.eq_any(ids)),
    )
    .execute(conn)?;

    Ok(removed)
}

impl LeadListWriter for DieselRepository {
    fn create_lead_list(&self, new_list: &NewLeadList) -> RepositoryResult<LeadList> {
        insert_lead_list(&mut *self.conn()?, new_list)
    }

    fn update_lead_list(
        &self,
        id: LeadListId,
        updates: &UpdateLeadList,
    ) -> RepositoryResult<LeadList> {
        update_lead_list_row(&mut *self.conn()?, id, updates)
    }

    fn delete_lead_list(&self, id: LeadListId) -> RepositoryResult<()> {
        delete_lead_list_row(&mut *self.conn()?, id)
    }

    fn add_contacts_to_lead_list(
        &self,
        list_id: LeadListId,
        contact_ids: &[ContactId],
    ) -> RepositoryResult<usize> {
        add_list_members(&mut *self.conn()?, list_id, contact_ids)
    }

    fn remove_contacts_from_lead_list(
        &self,
        list_id: LeadListId,
        contact_ids: &[ContactId],
    ) -> RepositoryResult<usize> {
        remove_list_members(&mut *self.conn()?, list_id, contact_ids)
    }
}
