use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::contact::NewContact;
use crate::domain::types::{CompanyId, LeadScore, PersonName, normalize_optional};
use crate::forms::{
    FormError, check_length, clean_values, double_option, optional_email, optional_url, patch,
};
use crate::repository::ContactFilter;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for creating a contact.
pub struct ContactForm {
    pub company_id: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(max = 255))]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub job_title: Option<String>,
    #[validate(length(max = 100))]
    pub department: Option<String>,
    #[validate(length(max = 50))]
    pub seniority_level: Option<String>,
    #[validate(length(max = 255))]
    pub linkedin_url: Option<String>,
    #[validate(length(max = 255))]
    pub twitter_url: Option<String>,
    #[validate(length(max = 100))]
    pub location_country: Option<String>,
    #[validate(length(max = 100))]
    pub location_state: Option<String>,
    #[validate(length(max = 100))]
    pub location_city: Option<String>,
    /// Explicit score; computed from the profile when omitted.
    #[validate(range(min = 0, max = 100))]
    pub lead_score: Option<i32>,
}

impl TryFrom<ContactForm> for NewContact {
    type Error = FormError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let contact = Self {
            company_id: form.company_id.map(CompanyId::new).transpose()?,
            first_name: PersonName::new(form.first_name)?,
            last_name: PersonName::new(form.last_name)?,
            email: optional_email(form.email)?,
            phone: normalize_optional(form.phone),
            job_title: normalize_optional(form.job_title),
            department: normalize_optional(form.department),
            seniority_level: normalize_optional(form.seniority_level),
            linkedin_url: optional_url(form.linkedin_url)?,
            twitter_url: optional_url(form.twitter_url)?,
            location_country: normalize_optional(form.location_country),
            location_state: normalize_optional(form.location_state),
            location_city: normalize_optional(form.location_city),
            lead_score: LeadScore::default(),
            last_activity_date: None,
        };

        Ok(match form.lead_score {
            Some(score) => NewContact {
                lead_score: LeadScore::new(score)?,
                ..contact
            },
            None => contact.scored(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Partial contact update; absent fields are left untouched, `null` clears.
///
/// The score is recomputed from the merged profile unless `lead_score` is set.
pub struct UpdateContactForm {
    #[serde(default, deserialize_with = "double_option")]
    pub company_id: Option<Option<i32>>,
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub job_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub department: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub seniority_level: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub twitter_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_country: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_state: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location_city: Option<Option<String>>,
    #[validate(range(min = 0, max = 100))]
    pub lead_score: Option<i32>,
}

impl UpdateContactForm {
    /// Merges the update into the stored contact values.
    pub fn apply(self, current: NewContact) -> Result<NewContact, FormError> {
        self.validate()?;

        let company_id = match self.company_id {
            Some(id) => id.map(CompanyId::new).transpose()?,
            None => current.company_id,
        };
        let first_name = match self.first_name {
            Some(name) => PersonName::new(name)?,
            None => current.first_name,
        };
        let last_name = match self.last_name {
            Some(name) => PersonName::new(name)?,
            None => current.last_name,
        };
        let email = match self.email {
            Some(email) => optional_email(email)?,
            None => current.email,
        };
        let linkedin_url = match self.linkedin_url {
            Some(url) => optional_url(url)?,
            None => current.linkedin_url,
        };
        let twitter_url = match self.twitter_url {
            Some(url) => optional_url(url)?,
            None => current.twitter_url,
        };

        let contact = NewContact {
            company_id,
            first_name,
            last_name,
            email,
            phone: normalize_optional(patch(current.phone, self.phone)),
            job_title: normalize_optional(patch(current.job_title, self.job_title)),
            department: normalize_optional(patch(current.department, self.department)),
            seniority_level: normalize_optional(patch(
                current.seniority_level,
                self.seniority_level,
            )),
            linkedin_url,
            twitter_url,
            location_country: normalize_optional(patch(
                current.location_country,
                self.location_country,
            )),
            location_state: normalize_optional(patch(current.location_state, self.location_state)),
            location_city: normalize_optional(patch(current.location_city, self.location_city)),
            lead_score: current.lead_score,
            last_activity_date: current.last_activity_date,
        };
        check_columns(&contact)?;

        Ok(match self.lead_score {
            Some(score) => NewContact {
                lead_score: LeadScore::new(score)?,
                ..contact
            },
            None => contact.scored(),
        })
    }
}

/// Widths of the contact columns a merged update can still overflow.
fn check_columns(contact: &NewContact) -> Result<(), FormError> {
    check_length("email", contact.email.as_ref().map(|e| e.as_str()), 255)?;
    check_length("phone", contact.phone.as_deref(), 50)?;
    check_length("job_title", contact.job_title.as_deref(), 255)?;
    check_length("department", contact.department.as_deref(), 100)?;
    check_length("seniority_level", contact.seniority_level.as_deref(), 50)?;
    check_length("location_country", contact.location_country.as_deref(), 100)?;
    check_length("location_state", contact.location_state.as_deref(), 100)?;
    check_length("location_city", contact.location_city.as_deref(), 100)
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Query string of `GET /api/contacts`.
pub struct ContactQuery {
    pub search: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub seniority_level: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub company_name: Option<String>,
    pub company_industry: Option<String>,
    pub company_size: Option<String>,
    pub min_score: Option<i32>,
    pub max_score: Option<i32>,
    /// `true` or `false`; anything else is ignored.
    pub has_email: Option<String>,
    pub has_phone: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

fn flag(value: Option<&str>) -> Option<bool> {
    match value.map(str::trim) {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

impl From<&ContactQuery> for ContactFilter {
    fn from(query: &ContactQuery) -> Self {
        Self {
            search: normalize_optional(query.search.clone()),
            job_title: normalize_optional(query.job_title.clone()),
            department: normalize_optional(query.department.clone()),
            seniority_level: normalize_optional(query.seniority_level.clone()),
            country: normalize_optional(query.country.clone()),
            state: normalize_optional(query.state.clone()),
            city: normalize_optional(query.city.clone()),
            company_name: normalize_optional(query.company_name.clone()),
            company_industry: normalize_optional(query.company_industry.clone()),
            company_size: normalize_optional(query.company_size.clone()),
            min_score: query.min_score,
            max_score: query.max_score,
            has_email: flag(query.has_email.as_deref()),
            has_phone: flag(query.has_phone.as_deref()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
/// Multi-value contact filters used by search and export.
pub struct ContactSearchFilters {
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub seniority_levels: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub company_industries: Vec<String>,
    #[serde(default)]
    pub company_sizes: Vec<String>,
    pub lead_score_range: Option<ScoreRange>,
    pub has_email: Option<bool>,
    pub has_phone: Option<bool>,
}

impl From<ContactSearchFilters> for ContactFilter {
    fn from(filters: ContactSearchFilters) -> Self {
        let range = filters.lead_score_range.unwrap_or_default();
        Self {
            min_score: range.min,
            max_score: range.max,
            has_email: filters.has_email,
            has_phone: filters.has_phone,
            job_titles: clean_values(filters.job_titles),
            departments: clean_values(filters.departments),
            seniority_levels: clean_values(filters.seniority_levels),
            countries: clean_values(filters.countries),
            company_industries: clean_values(filters.company_industries),
            company_sizes: clean_values(filters.company_sizes),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Body of `POST /api/contacts/search`.
pub struct ContactSearchForm {
    #[serde(default)]
    pub filters: ContactSearchFilters,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
/// Body of `POST /api/contacts/bulk`.
pub struct BulkContactsForm {
    #[serde(default)]
    pub contacts: Vec<ContactForm>,
}

impl TryFrom<BulkContactsForm> for Vec<NewContact> {
    type Error = FormError;

    fn try_from(form: BulkContactsForm) -> Result<Self, Self::Error> {
        if form.contacts.is_empty() {
            return Err(FormError::Missing("contacts"));
        }
        form.contacts.into_iter().map(NewContact::try_from).collect()
    }
}
