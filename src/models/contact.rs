//! Diesel models for the `contacts` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    contact::{Contact as DomainContact, NewContact as DomainNewContact},
    types::{CompanyId, ContactEmail, ContactId, LeadScore, PersonName, TypeConstraintError, WebUrl},
};
use crate::models::company::{Company, optional_url};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Company, foreign_key = company_id))]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// Diesel model for [`crate::domain::contact::Contact`].
pub struct Contact {
    pub id: i32,
    pub company_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub seniority_level: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub location_country: Option<String>,
    pub location_state: Option<String>,
    pub location_city: Option<String>,
    pub lead_score: i32,
    pub last_activity_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(treat_none_as_null = true)]
/// Column values written on insert and on full updates.
pub struct NewContact<'a> {
    pub company_id: Option<i32>,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub job_title: Option<&'a str>,
    pub department: Option<&'a str>,
    pub seniority_level: Option<&'a str>,
    pub linkedin_url: Option<&'a str>,
    pub twitter_url: Option<&'a str>,
    pub location_country: Option<&'a str>,
    pub location_state: Option<&'a str>,
    pub location_city: Option<&'a str>,
    pub lead_score: i32,
    pub last_activity_date: Option<NaiveDateTime>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Contact> for DomainContact {
    type Error = TypeConstraintError;

    /// Converts a row into a domain contact without its company.
    fn try_from(contact: Contact) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ContactId::new(contact.id)?,
            company_id: contact.company_id.map(CompanyId::new).transpose()?,
            first_name: PersonName::new(contact.first_name)?,
            last_name: PersonName::new(contact.last_name)?,
            email: contact.email.map(ContactEmail::new).transpose()?,
            phone: contact.phone,
            job_title: contact.job_title,
            department: contact.department,
            seniority_level: contact.seniority_level,
            linkedin_url: optional_url(contact.linkedin_url)?,
            twitter_url: optional_url(contact.twitter_url)?,
            location_country: contact.location_country,
            location_state: contact.location_state,
            location_city: contact.location_city,
            lead_score: LeadScore::new(contact.lead_score)?,
            last_activity_date: contact.last_activity_date,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
            company: None,
        })
    }
}

impl<'a> From<&'a DomainNewContact> for NewContact<'a> {
    fn from(contact: &'a DomainNewContact) -> Self {
        Self {
            company_id: contact.company_id.map(CompanyId::get),
            first_name: contact.first_name.as_str(),
            last_name: contact.last_name.as_str(),
            email: contact.email.as_ref().map(ContactEmail::as_str),
            phone: contact.phone.as_deref(),
            job_title: contact.job_title.as_deref(),
            department: contact.department.as_deref(),
            seniority_level: contact.seniority_level.as_deref(),
            linkedin_url: contact.linkedin_url.as_ref().map(WebUrl::as_str),
            twitter_url: contact.twitter_url.as_ref().map(WebUrl::as_str),
            location_country: contact.location_country.as_deref(),
            location_state: contact.location_state.as_deref(),
            location_city: contact.location_city.as_deref(),
            lead_score: contact.lead_score.get(),
            last_activity_date: contact.last_activity_date,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row() -> Contact {
        let now = Utc::now().naive_utc();
        Contact {
            id: 11,
            company_id: Some(2),
            first_name: "Maria".into(),
            last_name: "Rodriguez".into(),
            email: Some("Maria@DataVault.com".into()),
            phone: None,
            job_title: Some("CTO".into()),
            department: Some("Engineering".into()),
            seniority_level: Some("C-Level".into()),
            linkedin_url: Some("https://linkedin.com/in/mariarodriguez".into()),
            twitter_url: None,
            location_country: None,
            location_state: None,
            location_city: None,
            lead_score: 80,
            last_activity_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_converts_to_domain() {
        let contact = DomainContact::try_from(row()).unwrap();
        assert_eq!(contact.company_id.map(CompanyId::get), Some(2));
        assert_eq!(contact.email.as_ref().unwrap().as_str(), "maria@datavault.com");
        assert_eq!(contact.lead_score.get(), 80);
        assert_eq!(contact.full_name(), "Maria Rodriguez");
        assert!(contact.company.is_none());
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let mut bad = row();
        bad.lead_score = 250;
        assert_eq!(
            DomainContact::try_from(bad),
            Err(TypeConstraintError::ScoreOutOfRange)
        );
    }

    #[test]
    fn domain_new_contact_maps_to_insertable() {
        let mut domain = DomainNewContact::named(
            PersonName::new("Alex").unwrap(),
            PersonName::new("Chen").unwrap(),
        );
        domain.email = Some(ContactEmail::new("alex@techflow.io").unwrap());
        domain.lead_score = LeadScore::new(42).unwrap();
        let new: NewContact = (&domain).into();
        assert_eq!(new.first_name, "Alex");
        assert_eq!(new.email, Some("alex@techflow.io"));
        assert_eq!(new.lead_score, 42);
        assert_eq!(new.company_id, None);
    }
}
