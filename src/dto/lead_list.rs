use serde::Serialize;

use crate::domain::lead_list::LeadList;
use crate::domain::stats::LeadListStats;
use crate::dto::contact::ContactResponse;
use crate::pagination::PageMeta;

#[derive(Debug, Clone, Serialize)]
pub struct LeadListPage {
    pub lists: Vec<LeadList>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// A list with one page of its members.
#[derive(Debug, Clone, Serialize)]
pub struct LeadListDetail {
    pub list: LeadList,
    pub contacts: Vec<ContactResponse>,
    pub total_contacts: usize,
    pub pages: usize,
    pub current_page: usize,
    pub per_page: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl LeadListDetail {
    pub fn new(list: LeadList, contacts: Vec<ContactResponse>, meta: PageMeta) -> Self {
        Self {
            list,
            contacts,
            total_contacts: meta.total,
            pages: meta.pages,
            current_page: meta.current_page,
            per_page: meta.per_page,
            has_next: meta.has_next,
            has_prev: meta.has_prev,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddContactsResponse {
    pub message: String,
    pub list: LeadList,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListSize {
    pub name: String,
    pub contact_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeadListStatsResponse {
    pub total_lists: usize,
    pub total_list_contacts: usize,
    pub top_lists: Vec<ListSize>,
}

impl From<LeadListStats> for LeadListStatsResponse {
    fn from(stats: LeadListStats) -> Self {
        Self {
            total_lists: stats.total_lists,
            total_list_contacts: stats.total_list_contacts,
            top_lists: stats
                .top_lists
                .into_iter()
                .map(|group| ListSize {
                    name: group.label,
                    contact_count: group.count,
                })
                .collect(),
        }
    }
}
