use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        company::{Company, NewCompany},
        contact::{Contact, NewContact},
        lead_list::{LeadList, NewLeadList, UpdateLeadList},
        saved_search::{NewSavedSearch, SavedSearch},
        stats::{ContactStats, DatabaseStats, LeadListStats},
        types::{CompanyId, ContactId, LeadListId, SavedSearchId},
    },
    repository::errors::RepositoryResult,
};

pub mod company;
pub mod contact;
pub mod errors;
pub mod lead_list;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod saved_search;
pub mod stats;
pub mod transaction;

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Rows to skip; saturates so far-away pages come back empty.
    pub fn offset(&self) -> i64 {
        let skipped = (self.page.max(1) - 1).saturating_mul(self.per_page);
        i64::try_from(skipped).unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// Company filters; every populated field narrows the result.
///
/// Single-value text filters match case-insensitive substrings, list filters
/// match any of their values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    /// Substring of name, domain or description.
    pub search: Option<String>,
    pub industry: Option<String>,
    /// Exact size bucket, e.g. `50-100`.
    pub company_size: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub funding_status: Option<String>,
    pub founded_after: Option<i32>,
    pub founded_before: Option<i32>,
    pub technology: Option<String>,
    pub industries: Vec<String>,
    pub company_sizes: Vec<String>,
    pub countries: Vec<String>,
    pub funding_statuses: Vec<String>,
    /// Any of these appears in the technology stack.
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyListQuery {
    pub filter: CompanyFilter,
    pub pagination: Option<Pagination>,
}

impl CompanyListQuery {
    pub fn new(filter: CompanyFilter) -> Self {
        Self {
            filter,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Contact filters, including filters on the contact's company.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFilter {
    /// Substring of first/last name, email, job title or company name.
    pub search: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    /// Exact seniority level.
    pub seniority_level: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub company_name: Option<String>,
    pub company_industry: Option<String>,
    /// Exact company size bucket.
    pub company_size: Option<String>,
    pub min_score: Option<i32>,
    pub max_score: Option<i32>,
    /// `Some(false)` selects contacts with a missing or blank email.
    pub has_email: Option<bool>,
    pub has_phone: Option<bool>,
    /// Any of these appears in the job title.
    pub job_titles: Vec<String>,
    pub departments: Vec<String>,
    pub seniority_levels: Vec<String>,
    pub countries: Vec<String>,
    pub company_industries: Vec<String>,
    pub company_sizes: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactOrder {
    /// Oldest first.
    #[default]
    Id,
    /// Highest lead score first, then oldest.
    LeadScore,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactListQuery {
    pub filter: ContactFilter,
    pub order: ContactOrder,
    pub pagination: Option<Pagination>,
}

impl ContactListQuery {
    pub fn new(filter: ContactFilter) -> Self {
        Self {
            filter,
            order: ContactOrder::Id,
            pagination: None,
        }
    }

    pub fn order_by(mut self, order: ContactOrder) -> Self {
        self.order = order;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait CompanyReader {
    fn get_company_by_id(&self, id: CompanyId) -> RepositoryResult<Option<Company>>;
    fn list_companies(&self, query: CompanyListQuery) -> RepositoryResult<(usize, Vec<Company>)>;
}

pub trait CompanyWriter {
    fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>>;
    fn update_company(&self, id: CompanyId, company: &NewCompany) -> RepositoryResult<Company>;
    fn delete_company(&self, id: CompanyId) -> RepositoryResult<()>;
}

pub trait ContactReader {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
    fn list_contacts(&self, query: ContactListQuery) -> RepositoryResult<(usize, Vec<Contact>)>;
    /// Non-empty email addresses of the company's contacts.
    fn list_company_emails(&self, company_id: CompanyId) -> RepositoryResult<Vec<String>>;
    fn contact_stats(&self) -> RepositoryResult<ContactStats>;
}

pub trait ContactWriter {
    fn create_contacts(&self, new_contacts: &[NewContact]) -> RepositoryResult<Vec<Contact>>;
    fn update_contact(&self, id: ContactId, contact: &NewContact) -> RepositoryResult<Contact>;
    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()>;
}

pub trait LeadListReader {
    fn get_lead_list_by_id(&self, id: LeadListId) -> RepositoryResult<Option<LeadList>>;
    fn list_lead_lists(
        &self,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<LeadList>)>;
    /// Members of a list, most recently added first.
    fn list_lead_list_contacts(
        &self,
        list_id: LeadListId,
        pagination: Option<Pagination>,
    ) -> RepositoryResult<(usize, Vec<Contact>)>;
    fn lead_list_stats(&self) -> RepositoryResult<LeadListStats>;
}

pub trait LeadListWriter {
    fn create_lead_list(&self, new_list: &NewLeadList) -> RepositoryResult<LeadList>;
    fn update_lead_list(
        &self,
        id: LeadListId,
        updates: &UpdateLeadList,
    ) -> RepositoryResult<LeadList>;
    fn delete_lead_list(&self, id: LeadListId) -> RepositoryResult<()>;
    /// Adds existing contacts that are not members yet; returns how many were added.
    fn add_contacts_to_lead_list(
        &self,
        list_id: LeadListId,
        contact_ids: &[ContactId],
    ) -> RepositoryResult<usize>;
    /// Removes the given members; returns how many were removed.
    fn remove_contacts_from_lead_list(
        &self,
        list_id: LeadListId,
        contact_ids: &[ContactId],
    ) -> RepositoryResult<usize>;
}

pub trait SavedSearchReader {
    fn list_saved_searches(&self) -> RepositoryResult<Vec<SavedSearch>>;
}

pub trait SavedSearchWriter {
    fn create_saved_search(&self, new_search: &NewSavedSearch) -> RepositoryResult<SavedSearch>;
    fn delete_saved_search(&self, id: SavedSearchId) -> RepositoryResult<()>;
}

pub trait StatsReader {
    fn database_stats(&self) -> RepositoryResult<DatabaseStats>;
}

/// Write access to companies, contacts and lead lists as one object.
pub trait DataWriter: CompanyWriter + ContactWriter + LeadListWriter {}

impl<T> DataWriter for T where T: CompanyWriter + ContactWriter + LeadListWriter + ?Sized {}

pub trait Transactional {
    /// Runs `work` in a single transaction; its writes are committed only when it returns `Ok`.
    fn transaction<T, F>(&self, work: F) -> RepositoryResult<T>
    where
        F: FnOnce(&dyn DataWriter) -> RepositoryResult<T>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_offsets() {
        let p = Pagination {
            page: 3,
            per_page: 20,
        };
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
        let first = Pagination {
            page: 0,
            per_page: 20,
        };
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn huge_page_offset_saturates() {
        let p = Pagination {
            page: usize::MAX,
            per_page: 100,
        };
        assert_eq!(p.offset(), i64::MAX);
        let p = Pagination {
            page: i64::MAX as usize,
            per_page: 20,
        };
        assert_eq!(p.offset(), i64::MAX);
    }

    #[test]
    fn contact_query_builder() {
        let query = ContactListQuery::new(ContactFilter::default())
            .order_by(ContactOrder::LeadScore)
            .paginate(2, 10);
        assert_eq!(query.order, ContactOrder::LeadScore);
        assert_eq!(
            query.pagination,
            Some(Pagination {
                page: 2,
                per_page: 10
            })
        );
    }
}
