//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::company::{Company, NewCompany};
use crate::domain::contact::{Contact, NewContact};
use crate::domain::lead_list::{LeadList, NewLeadList, UpdateLeadList};
use crate::domain::saved_search::{NewSavedSearch, SavedSearch};
use crate::domain::stats::{ContactStats, DatabaseStats, LeadListStats};
use crate::domain::types::{CompanyId, ContactId, LeadListId, SavedSearchId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CompanyListQuery, CompanyReader, CompanyWriter, ContactListQuery, ContactReader,
    ContactWriter, DataWriter, LeadListReader, LeadListWriter, Pagination, SavedSearchReader,
    SavedSearchWriter, StatsReader, Transactional,
};

mock! {
    pub Repository {}

    impl CompanyReader for Repository {
        fn get_company_by_id(&self, id: CompanyId) -> RepositoryResult<Option<Company>>;
        fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)>;
    }

    impl CompanyWriter for Repository {
        fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>>;
        fn update_company(&self, id: CompanyId, company: &NewCompany) -> RepositoryResult<Company>;
        fn delete_company(&self, id: CompanyId) -> RepositoryResult<()>;
    }

    impl ContactReader for Repository {
        fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
        fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)>;
        fn list_company_emails(&self, company_id: CompanyId) -> RepositoryResult<Vec<String>>;
        fn contact_stats(&self) -> RepositoryResult<ContactStats>;
    }

    impl ContactWriter for Repository {
        fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<Vec<Contact>>;
        fn update_contact(&self, id: ContactId, contact: &NewContact) -> RepositoryResult<Contact>;
        fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
    }

    impl LeadListReader for Repository {
        fn get_lead_list_by_id(&self, id: LeadListId) -> RepositoryResult<Option<LeadList>>;
        fn list_lead_lists(
            &self,
            pagination: Option<Pagination>,
        ) -> RepositoryResult<(usize, Vec<LeadList>)>;
        fn list_lead_list_contacts(
            &self,
            list_id: LeadListId,
            pagination: Option<Pagination>,
        ) -> RepositoryResult<(usize, Vec<Contact>)>;
        fn lead_list_stats(&self) -> RepositoryResult<LeadListStats>;
    }

    impl LeadListWriter for Repository {
        fn create_lead_list(&self, new_list: &NewLeadList) -> RepositoryResult<LeadList>;
        fn update_lead_list(
            &self,
            id: LeadListId,
            updates: &UpdateLeadList,
        ) -> RepositoryResult<LeadList>;
        fn delete_lead_list(&self, id: LeadListId) -> RepositoryResult<()>;
        fn add_contacts_to_lead_list(
            &self,
            list_id: LeadListId,
            contact_ids: &[ContactId],
        ) -> RepositoryResult<usize>;
        fn remove_contacts_from_lead_list(
            &self,
            list_id: LeadListId,
            contact_ids: &[ContactId],
        ) -> RepositoryResult<usize>;
    }

    impl SavedSearchReader for Repository {
        fn list_saved_searches(&self) -> RepositoryResult<Vec<SavedSearch>>;
    }

    impl SavedSearchWriter for Repository {
        fn create_saved_search(&self, new_search: &NewSavedSearch) -> RepositoryResult<SavedSearch>;
        fn delete_saved_search(&self, id: SavedSearchId) -> RepositoryResult<()>;
    }

    impl StatsReader for Repository {
        fn database_stats(&self) -> RepositoryResult<DatabaseStats>;
    }
}

/// Runs the work directly against the mock.
impl Transactional for MockRepository {
    fn transaction<T, F>(&self, work: F) -> RepositoryResult<T>
    where
        F: FnOnce(&dyn DataWriter) -> RepositoryResult<T>,
    {
        work(self)
    }
}
