use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::company::Company;
use crate::domain::scoring::{ScoreProfile, lead_score};
use crate::domain::types::{CompanyId, ContactEmail, ContactId, LeadScore, PersonName, WebUrl};

/// An individual prospect, optionally linked to a [`Company`].
///
/// A *lead* is a contact ranked by its [`LeadScore`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub company_id: Option<CompanyId>,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Option<ContactEmail>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub seniority_level: Option<String>,
    pub linkedin_url: Option<WebUrl>,
    pub twitter_url: Option<WebUrl>,
    pub location_country: Option<String>,
    pub location_state: Option<String>,
    pub location_city: Option<String>,
    pub lead_score: LeadScore,
    pub last_activity_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Company the contact works for, loaded alongside the contact.
    pub company: Option<Company>,
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Contact attributes supplied on create and on full updates.
#[derive(Clone, Debug, PartialEq)]
pub struct NewContact {
    pub company_id: Option<CompanyId>,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Option<ContactEmail>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub seniority_level: Option<String>,
    pub linkedin_url: Option<WebUrl>,
    pub twitter_url: Option<WebUrl>,
    pub location_country: Option<String>,
    pub location_state: Option<String>,
    pub location_city: Option<String>,
    pub lead_score: LeadScore,
    pub last_activity_date: Option<NaiveDateTime>,
}

impl NewContact {
    /// Minimal contact carrying only a name.
    pub fn named(first_name: PersonName, last_name: PersonName) -> Self {
        Self {
            company_id: None,
            first_name,
            last_name,
            email: None,
            phone: None,
            job_title: None,
            department: None,
            seniority_level: None,
            linkedin_url: None,
            twitter_url: None,
            location_country: None,
            location_state: None,
            location_city: None,
            lead_score: LeadScore::default(),
            last_activity_date: None,
        }
    }

    /// Replaces `lead_score` with the value computed from the contact's profile.
    #[must_use]
    pub fn scored(mut self) -> Self {
        self.lead_score = lead_score(&ScoreProfile::from(&self));
        self
    }
}

impl From<Contact> for NewContact {
    fn from(contact: Contact) -> Self {
        Self {
            company_id: contact.company_id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone: contact.phone,
            job_title: contact.job_title,
            department: contact.department,
            seniority_level: contact.seniority_level,
            linkedin_url: contact.linkedin_url,
            twitter_url: contact.twitter_url,
            location_country: contact.location_country,
            location_state: contact.location_state,
            location_city: contact.location_city,
            lead_score: contact.lead_score,
            last_activity_date: contact.last_activity_date,
        }
    }
}
