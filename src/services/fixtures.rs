//! Domain values shared by the service tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::company::Company;
use crate::domain::contact::Contact;
use crate::domain::lead_list::LeadList;
use crate::domain::types::{
    CompanyId, CompanyName, ContactEmail, ContactId, LeadListId, LeadListName, LeadScore,
    PersonName,
};

pub fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("valid timestamp")
}

pub fn company(id: i32, name: &str) -> Company {
    Company {
        id: CompanyId::new(id).expect("valid id"),
        name: CompanyName::new(name).expect("valid name"),
        domain: None,
        website: None,
        industry: None,
        company_size: None,
        location_country: None,
        location_state: None,
        location_city: None,
        founded_year: None,
        funding_status: None,
        funding_amount: None,
        technology_stack: None,
        description: None,
        linkedin_url: None,
        phone: None,
        created_at: timestamp(),
        updated_at: timestamp(),
        contact_count: 0,
    }
}

pub fn contact(id: i32, first: &str, last: &str) -> Contact {
    Contact {
        id: ContactId::new(id).expect("valid id"),
        company_id: None,
        first_name: PersonName::new(first).expect("valid name"),
        last_name: PersonName::new(last).expect("valid name"),
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
        created_at: timestamp(),
        updated_at: timestamp(),
        company: None,
    }
}

pub fn contact_at(id: i32, first: &str, last: &str, company: Company) -> Contact {
    Contact {
        company_id: Some(company.id),
        company: Some(company),
        ..contact(id, first, last)
    }
}

pub fn with_email(mut contact: Contact, email: &str) -> Contact {
    contact.email = Some(ContactEmail::new(email).expect("valid email"));
    contact
}

pub fn lead_list(id: i32, name: &str) -> LeadList {
    LeadList {
        id: LeadListId::new(id).expect("valid id"),
        name: LeadListName::new(name).expect("valid name"),
        description: None,
        created_by: "system".to_string(),
        created_at: timestamp(),
        updated_at: timestamp(),
        contact_count: 0,
    }
}
