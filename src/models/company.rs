//! Diesel models for the `companies` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    company::{Company as DomainCompany, NewCompany as DomainNewCompany},
    types::{CompanyId, CompanyName, TypeConstraintError, WebUrl},
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// Diesel model for [`crate::domain::company::Company`].
pub struct Company {
    pub id: i32,
    pub name: String,
    pub domain: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub location_country: Option<String>,
    pub location_state: Option<String>,
    pub location_city: Option<String>,
    pub founded_year: Option<i32>,
    pub funding_status: Option<String>,
    pub funding_amount: Option<f64>,
    pub technology_stack: Option<String>,
    pub description: Option<String>,
    pub linkedin_url: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::companies)]
#[diesel(treat_none_as_null = true)]
/// Column values written on insert and on full updates.
pub struct NewCompany<'a> {
    pub name: &'a str,
    pub domain: Option<&'a str>,
    pub website: Option<&'a str>,
    pub industry: Option<&'a str>,
    pub company_size: Option<&'a str>,
    pub location_country: Option<&'a str>,
    pub location_state: Option<&'a str>,
    pub location_city: Option<&'a str>,
    pub founded_year: Option<i32>,
    pub funding_status: Option<&'a str>,
    pub funding_amount: Option<f64>,
    pub technology_stack: Option<&'a str>,
    pub description: Option<&'a str>,
    pub linkedin_url: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

pub(crate) fn optional_url(value: Option<String>) -> Result<Option<WebUrl>, TypeConstraintError> {
    value.map(WebUrl::new).transpose()
}

impl TryFrom<Company> for DomainCompany {
    type Error = TypeConstraintError;

    /// Converts a row into a domain company with `contact_count` left at zero.
    fn try_from(company: Company) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompanyId::new(company.id)?,
            name: CompanyName::new(company.name)?,
            domain: company.domain,
            website: optional_url(company.website)?,
            industry: company.industry,
            company_size: company.company_size,
            location_country: company.location_country,
            location_state: company.location_state,
            location_city: company.location_city,
            founded_year: company.founded_year,
            funding_status: company.funding_status,
            funding_amount: company.funding_amount,
            technology_stack: company.technology_stack,
            description: company.description,
            linkedin_url: optional_url(company.linkedin_url)?,
            phone: company.phone,
            created_at: company.created_at,
            updated_at: company.updated_at,
            contact_count: 0,
        })
    }
}

impl<'a> From<&'a DomainNewCompany> for NewCompany<'a> {
    fn from(company: &'a DomainNewCompany) -> Self {
        Self {
            name: company.name.as_str(),
            domain: company.domain.as_deref(),
            website: company.website.as_ref().map(WebUrl::as_str),
            industry: company.industry.as_deref(),
            company_size: company.company_size.as_deref(),
            location_country: company.location_country.as_deref(),
            location_state: company.location_state.as_deref(),
            location_city: company.location_city.as_deref(),
            founded_year: company.founded_year,
            funding_status: company.funding_status.as_deref(),
            funding_amount: company.funding_amount,
            technology_stack: company.technology_stack.as_deref(),
            description: company.description.as_deref(),
            linkedin_url: company.linkedin_url.as_ref().map(WebUrl::as_str),
            phone: company.phone.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row() -> Company {
        let now = Utc::now().naive_utc();
        Company {
            id: 3,
            name: "TechFlow Solutions".into(),
            domain: Some("techflow.io".into()),
            website: Some("https://techflow.io".into()),
            industry: Some("Software".into()),
            company_size: Some("50-100".into()),
            location_country: Some("United States".into()),
            location_state: Some("California".into()),
            location_city: Some("San Francisco".into()),
            founded_year: Some(2018),
            funding_status: Some("Series A".into()),
            funding_amount: Some(15_000_000.0),
            technology_stack: Some("React, Node.js".into()),
            description: None,
            linkedin_url: None,
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_converts_to_domain() {
        let company = DomainCompany::try_from(row()).unwrap();
        assert_eq!(company.id.get(), 3);
        assert_eq!(company.name.as_str(), "TechFlow Solutions");
        assert_eq!(company.website.unwrap().as_str(), "https://techflow.io");
        assert_eq!(company.contact_count, 0);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut bad = row();
        bad.name = " ".into();
        assert!(DomainCompany::try_from(bad).is_err());
    }

    #[test]
    fn domain_new_company_maps_to_insertable() {
        let mut domain = DomainNewCompany::named(CompanyName::new("Acme").unwrap());
        domain.website = Some(WebUrl::new("acme.com").unwrap());
        domain.founded_year = Some(1999);
        let new: NewCompany = (&domain).into();
        assert_eq!(new.name, "Acme");
        assert_eq!(new.website, Some("https://acme.com"));
        assert_eq!(new.founded_year, Some(1999));
        assert_eq!(new.industry, None);
    }
}
