use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{CompanyId, CompanyName, WebUrl};

/// An organization that contacts can belong to.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub domain: Option<String>,
    pub website: Option<WebUrl>,
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
    pub linkedin_url: Option<WebUrl>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Number of contacts referencing this company.
    pub contact_count: usize,
}

/// Company attributes supplied on create and on full updates.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCompany {
    pub name: CompanyName,
    pub domain: Option<String>,
    pub website: Option<WebUrl>,
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
    pub linkedin_url: Option<WebUrl>,
    pub phone: Option<String>,
}

impl NewCompany {
    /// Minimal company carrying only a name.
    pub fn named(name: CompanyName) -> Self {
        Self {
            name,
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
        }
    }
}

impl Company {
    /// Email domain for the company: the explicit domain, else the website host.
    pub fn email_domain(&self) -> Option<String> {
        use crate::domain::email_patterns::{clean_domain, extract_domain_from_website};

        self.domain
            .as_deref()
            .map(clean_domain)
            .filter(|d| !d.is_empty())
            .or_else(|| {
                self.website
                    .as_ref()
                    .map(|w| extract_domain_from_website(w.as_str()))
                    .filter(|d| !d.is_empty())
            })
    }
}

impl From<Company> for NewCompany {
    fn from(company: Company) -> Self {
        Self {
            name: company.name,
            domain: company.domain,
            website: company.website,
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
            linkedin_url: company.linkedin_url,
            phone: company.phone,
        }
    }
}
