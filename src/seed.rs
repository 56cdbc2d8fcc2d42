//! Sample data loaded by the `init_db` binary into an empty database.

use serde_json::{Value, json};

use crate::domain::company::NewCompany;
use crate::domain::contact::{Contact, NewContact};
use crate::domain::lead_list::NewLeadList;
use crate::domain::types::ContactId;
use crate::forms::company::CompanyForm;
use crate::forms::contact::ContactForm;
use crate::forms::lead_list::LeadListForm;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CompanyWriter, ContactWriter, LeadListWriter, StatsReader, Transactional};
use crate::services::{ServiceError, ServiceResult};

/// Rows created by [`seed_sample_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub companies: usize,
    pub contacts: usize,
    pub lead_lists: usize,
}

/// Score above which a contact lands on the high-value list.
const HIGH_VALUE_SCORE: i32 = 80;

fn parse<T: serde::de::DeserializeOwned>(value: Value) -> ServiceResult<T> {
    serde_json::from_value(value)
        .map_err(|err| ServiceError::Internal(format!("Invalid sample record: {err}")))
}

fn sample_companies() -> Value {
    json!([
        {
            "name": "TechVision AI",
            "industry": "Technology",
            "website": "https://techvision.ai",
            "domain": "techvision.ai",
            "company_size": "10-50",
            "location_country": "United States",
            "location_state": "California",
            "location_city": "San Francisco",
            "description": "AI-powered business solutions for modern enterprises",
            "founded_year": 2020,
            "funding_status": "Series A",
            "funding_amount": 5000000,
            "linkedin_url": "https://linkedin.com/company/techvision-ai"
        },
        {
            "name": "GrowthMarketing Pro",
            "industry": "Marketing",
            "website": "https://growthmarketing.pro",
            "domain": "growthmarketing.pro",
            "company_size": "50-100",
            "location_country": "United States",
            "location_state": "Texas",
            "location_city": "Austin",
            "description": "Full-service digital marketing agency",
            "founded_year": 2018,
            "funding_status": "Bootstrapped",
            "linkedin_url": "https://linkedin.com/company/growthmarketing-pro"
        },
        {
            "name": "CloudScale Solutions",
            "industry": "Technology",
            "website": "https://cloudscale.io",
            "domain": "cloudscale.io",
            "company_size": "100-500",
            "location_country": "United States",
            "location_state": "Washington",
            "location_city": "Seattle",
            "description": "Enterprise cloud infrastructure and DevOps services",
            "founded_year": 2019,
            "funding_status": "Series B",
            "funding_amount": 15000000,
            "linkedin_url": "https://linkedin.com/company/cloudscale-solutions"
        },
        {
            "name": "DataInsights Corp",
            "industry": "Analytics",
            "website": "https://datainsights.com",
            "domain": "datainsights.com",
            "company_size": "50-100",
            "location_country": "United States",
            "location_state": "New York",
            "location_city": "New York",
            "description": "Business intelligence and data analytics platform",
            "founded_year": 2017,
            "funding_status": "Series A",
            "funding_amount": 8000000,
            "linkedin_url": "https://linkedin.com/company/datainsights-corp"
        },
        {
            "name": "EcoTech Innovations",
            "industry": "Clean Technology",
            "website": "https://ecotech.green",
            "domain": "ecotech.green",
            "company_size": "10-50",
            "location_country": "United States",
            "location_state": "California",
            "location_city": "Palo Alto",
            "description": "Sustainable technology solutions for businesses",
            "founded_year": 2021,
            "funding_status": "Seed",
            "funding_amount": 2000000,
            "linkedin_url": "https://linkedin.com/company/ecotech-innovations"
        }
    ])
}

/// `(company index, first, last, title, department, seniority, phone suffix)`.
const SAMPLE_CONTACTS: &[(usize, &str, &str, &str, &str, &str, &str)] = &[
    (0, "Alex", "Chen", "CEO", "Executive", "C-Level", "0101"),
    (0, "Maria", "Rodriguez", "CTO", "Engineering", "C-Level", "0102"),
    (1, "David", "Kim", "Founder & CEO", "Executive", "C-Level", "0201"),
    (1, "Sarah", "Johnson", "VP of Marketing", "Marketing", "VP", "0202"),
    (2, "Michael", "Thompson", "CEO", "Executive", "C-Level", "0301"),
    (2, "Jennifer", "Lee", "VP of Sales", "Sales", "VP", "0302"),
    (3, "Robert", "Wilson", "Founder", "Executive", "C-Level", "0401"),
    (3, "Emily", "Davis", "Head of Product", "Product", "Director", "0402"),
    (4, "James", "Green", "CEO", "Executive", "C-Level", "0501"),
    (4, "Lisa", "Brown", "VP of Engineering", "Engineering", "VP", "0502"),
];

fn sample_lists() -> Value {
    json!([
        {
            "name": "Tech CEOs Q1 2025",
            "description": "Technology company CEOs for Q1 outreach campaign"
        },
        {
            "name": "Marketing Decision Makers",
            "description": "Marketing executives and decision makers"
        },
        {
            "name": "High-Value Prospects",
            "description": "High lead score contacts for priority outreach"
        }
    ])
}

/// Sample contacts paired with the index of their company in `companies`.
fn sample_contacts(companies: &[NewCompany]) -> ServiceResult<Vec<(usize, NewContact)>> {
    SAMPLE_CONTACTS
        .iter()
        .map(|(index, first, last, title, department, seniority, phone)| {
            let company = companies
                .get(*index)
                .ok_or_else(|| ServiceError::Internal("Sample company missing".to_string()))?;
            let domain = company.domain.clone().unwrap_or_default();
            let form: ContactForm = parse(json!({
                "first_name": first,
                "last_name": last,
                "email": format!("{}.{}@{domain}", first.to_lowercase(), last.to_lowercase()),
                "phone": format!("+1-555-{phone}"),
                "job_title": title,
                "department": department,
                "seniority_level": seniority,
                "linkedin_url": format!(
                    "https://linkedin.com/in/{}{}",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                "location_country": company.location_country,
                "location_state": company.location_state,
                "location_city": company.location_city
            }))?;
            Ok((*index, NewContact::try_from(form)?))
        })
        .collect()
}

/// Validated sample records, ready to be written.
struct SampleData {
    companies: Vec<NewCompany>,
    contacts: Vec<(usize, NewContact)>,
    lists: Vec<NewLeadList>,
}

fn sample_data() -> ServiceResult<SampleData> {
    let company_forms: Vec<CompanyForm> = parse(sample_companies())?;
    let companies = company_forms
        .into_iter()
        .map(NewCompany::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let contacts = sample_contacts(&companies)?;

    let list_forms: Vec<LeadListForm> = parse(sample_lists())?;
    let lists = list_forms
        .into_iter()
        .map(NewLeadList::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SampleData {
        companies,
        contacts,
        lists,
    })
}

/// Members of each sample list, in list order.
fn list_members(contacts: &[Contact]) -> [Vec<ContactId>; 3] {
    let pick = |keep: &dyn Fn(&Contact) -> bool| -> Vec<ContactId> {
        contacts.iter().filter(|c| keep(c)).map(|c| c.id).collect()
    };
    let title_has = |c: &Contact, word: &str| c.job_title.as_deref().is_some_and(|t| t.contains(word));

    [
        pick(&|c: &Contact| title_has(c, "CEO")),
        pick(&|c: &Contact| {
            title_has(c, "Marketing")
                || c.department.as_deref().is_some_and(|d| d.contains("Marketing"))
        }),
        pick(&|c: &Contact| c.lead_score.get() > HIGH_VALUE_SCORE),
    ]
}

fn write_sample_data<R>(repo: &R, data: SampleData) -> RepositoryResult<SeedSummary>
where
    R: CompanyWriter + ContactWriter + LeadListWriter + ?Sized,
{
    let companies = repo.create_companies(&data.companies)?;
    log::info!("Created {} companies", companies.len());

    let new_contacts = data
        .contacts
        .into_iter()
        .map(|(index, contact)| -> RepositoryResult<NewContact> {
            let company = companies.get(index).ok_or_else(|| {
                RepositoryError::Unexpected(format!("Sample company {index} was not created"))
            })?;
            Ok(NewContact {
                company_id: Some(company.id),
                ..contact
            })
        })
        .collect::<RepositoryResult<Vec<_>>>()?;
    let contacts = repo.create_contacts(&new_contacts)?;
    log::info!("Created {} contacts", contacts.len());

    let members = list_members(&contacts);
    for (new_list, contact_ids) in data.lists.iter().zip(members.iter()) {
        let list = repo.create_lead_list(new_list)?;
        if !contact_ids.is_empty() {
            repo.add_contacts_to_lead_list(list.id, contact_ids)?;
        }
    }
    log::info!("Created {} lead lists", members.len());

    Ok(SeedSummary {
        companies: companies.len(),
        contacts: contacts.len(),
        lead_lists: members.len(),
    })
}

/// Loads the sample companies, contacts and lists unless companies exist.
///
/// Everything is written in one transaction. Returns `None` when the
/// database already holds data.
pub fn seed_sample_data<R>(repo: &R) -> ServiceResult<Option<SeedSummary>>
where
    R: StatsReader + Transactional + ?Sized,
{
    let existing = repo.database_stats()?;
    if existing.companies > 0 {
        log::info!(
            "Database already contains {} companies, skipping sample data",
            existing.companies
        );
        return Ok(None);
    }

    let data = sample_data()?;
    let summary = repo
        .transaction(|tx| write_sample_data(tx, data))
        .map_err(|err| {
            log::error!("Failed to write sample data, nothing was committed: {err}");
            err
        })?;

    Ok(Some(summary))
}
