//! Writers bound to one connection inside an open transaction.

use std::cell::RefCell;

use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::{
    domain::{
        company::{Company, NewCompany},
        contact::{Contact, NewContact},
        lead_list::{LeadList, NewLeadList, UpdateLeadList},
        types::{CompanyId, ContactId, LeadListId},
    },
    repository::{
        CompanyWriter, ContactWriter, DataWriter, DieselRepository, LeadListWriter,
        Transactional,
        company::{delete_company_row, insert_companies, update_company_row},
        contact::{delete_contact_row, insert_contacts, update_contact_row},
        errors::{RepositoryError, RepositoryResult},
        lead_list::{
            add_list_members, delete_lead_list_row, insert_lead_list, remove_list_members,
            update_lead_list_row,
        },
    },
};

/// Repository whose writes all go through the connection of one transaction.
pub struct TransactionRepository<'c> {
    conn: RefCell<&'c mut PgConnection>,
}

impl<'c> TransactionRepository<'c> {
    fn new(conn: &'c mut PgConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }

    fn with_conn<T>(
        &self,
        work: impl FnOnce(&mut PgConnection) -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        let mut conn = self.conn.borrow_mut();
        work(&mut **conn)
    }
}

impl Transactional for DieselRepository {
    fn transaction<T, F>(&self, work: F) -> RepositoryResult<T>
    where
        F: FnOnce(&dyn DataWriter) -> RepositoryResult<T>,
    {
        let mut conn = self.conn()?;
        conn.transaction::<T, RepositoryError, _>(|conn| {
            let repo = TransactionRepository::new(conn);
            work(&repo)
        })
    }
}

impl CompanyWriter for TransactionRepository<'_> {
    fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>> {
        self.with_conn(|conn| insert_companies(conn, new_companies))
    }

    fn update_company(&self, id: CompanyId, company: &NewCompany) -> RepositoryResult<Company> {
        self.with_conn(|conn| update_company_row(conn, id, company))
    }

    fn delete_company(&self, id: CompanyId) -> RepositoryResult<()> {
        self.with_conn(|conn| delete_company_row(conn, id))
    }
}

impl ContactWriter for TransactionRepository<'_> {
    fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<Vec<Contact>> {
        self.with_conn(|conn| insert_contacts(conn, new_contacts))
    }

    fn update_contact(&self, id: ContactId, contact: &NewContact) -> RepositoryResult<Contact> {
        self.with_conn(|conn| update_contact_row(conn, id, contact))
    }

    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        self.with_conn(|conn| delete_contact_row(conn, id))
    }
}

impl LeadListWriter for TransactionRepository<'_> {
    fn create_lead_list(&self, new_list: &NewLeadList) -> RepositoryResult<LeadList> {
        self.with_conn(|conn| insert_lead_list(conn, new_list))
    }

    fn update_lead_list(
        &self,
        id: LeadListId,
        updates: &UpdateLeadList,
    ) -> RepositoryResult<LeadList> {
        self.with_conn(|conn| update_lead_list_row(conn, id, updates))
    }

    fn delete_lead_list(&self, id: LeadListId) -> RepositoryResult<()> {
        self.with_conn(|conn| delete_lead_list_row(conn, id))
    }

    fn add_contacts_to_lead_list(
        &self,
        list_id: LeadListId,
        contact_ids: &[ContactId],
    ) -> RepositoryResult<usize> {
        self.with_conn(|conn| add_list_members(conn, list_id, contact_ids))
    }

    fn remove_contacts_from_lead_list(
        &self,
        list_id: LeadListId,
        contact_ids: &[ContactId],
    ) -> RepositoryResult<usize> {
        self.with_conn(|conn| remove_list_members(conn, list_id, contact_ids))
    }
}
