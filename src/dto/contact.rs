use serde::Serialize;

use crate::domain::contact::Contact;
use crate::domain::stats::{ContactStats, LabelCount};
use crate::forms::contact::ContactSearchFilters;
use crate::pagination::PageMeta;

/// Contact as returned by the API, with the derived `full_name`.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    #[serde(flatten)]
    pub contact: Contact,
    pub full_name: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            full_name: contact.full_name(),
            contact,
        }
    }
}

pub fn contact_responses(contacts: Vec<Contact>) -> Vec<ContactResponse> {
    contacts.into_iter().map(ContactResponse::from).collect()
}

/// One page of contacts.
#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub contacts: Vec<ContactResponse>,
    #[serde(flatten)]
    pub meta: PageMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<ContactSearchFilters>,
}

/// One page of leads, highest score first.
#[derive(Debug, Clone, Serialize)]
pub struct LeadPage {
    pub leads: Vec<ContactResponse>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkContactsResponse {
    pub message: String,
    pub contacts: Vec<ContactResponse>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndustryCount {
    pub industry: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TitleCount {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactStatsResponse {
    pub total_contacts: usize,
    pub contacts_with_email: usize,
    pub contacts_with_phone: usize,
    /// Percentage with two decimals.
    pub email_coverage: f64,
    pub phone_coverage: f64,
    pub top_industries: Vec<IndustryCount>,
    pub top_job_titles: Vec<TitleCount>,
}

fn coverage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 10_000.0).round() / 100.0
}

impl From<ContactStats> for ContactStatsResponse {
    fn from(stats: ContactStats) -> Self {
        Self {
            email_coverage: coverage(stats.contacts_with_email, stats.total_contacts),
            phone_coverage: coverage(stats.contacts_with_phone, stats.total_contacts),
            total_contacts: stats.total_contacts,
            contacts_with_email: stats.contacts_with_email,
            contacts_with_phone: stats.contacts_with_phone,
            top_industries: stats
                .top_industries
                .into_iter()
                .map(|LabelCount { label, count }| IndustryCount {
                    industry: label,
                    count,
                })
                .collect(),
            top_job_titles: stats
                .top_job_titles
                .into_iter()
                .map(|LabelCount { label, count }| TitleCount { title: label, count })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_is_rounded_percentage() {
        assert_eq!(coverage(1, 3), 33.33);
        assert_eq!(coverage(2, 2), 100.0);
        assert_eq!(coverage(0, 0), 0.0);
    }

    #[test]
    fn stats_relabel_groups() {
        let stats = ContactStats {
            total_contacts: 4,
            contacts_with_email: 3,
            contacts_with_phone: 1,
            top_industries: vec![LabelCount {
                label: "Technology".into(),
                count: 3,
            }],
            top_job_titles: vec![LabelCount {
                label: "CEO".into(),
                count: 2,
            }],
        };
        let response = ContactStatsResponse::from(stats);
        assert_eq!(response.email_coverage, 75.0);
        assert_eq!(response.phone_coverage, 25.0);
        assert_eq!(response.top_industries[0].industry, "Technology");
        assert_eq!(response.top_job_titles[0].title, "CEO");
    }
}
