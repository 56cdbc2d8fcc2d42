//! Zoho CRM import layout.

use crate::crm::CrmAdapter;
use crate::domain::company::Company;
use crate::domain::contact::Contact;

const CONTACT_HEADERS: &[&str] = &[
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Job Title",
    "Department",
    "Seniority Level",
    "Company Name",
    "Company Website",
    "Company Industry",
    "Company Size",
    "Country",
    "State",
    "City",
    "LinkedIn URL",
    "Twitter URL",
    "Lead Score",
];

const COMPANY_HEADERS: &[&str] = &[
    "Company Name",
    "Website",
    "Industry",
    "Company Size",
    "Country",
    "State",
    "City",
    "Founded Year",
    "Funding Status",
    "LinkedIn URL",
    "Phone",
    "Description",
];

const TEMPLATE_HEADERS: &[&str] = &[
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Job Title",
    "Company Name",
    "Company Website",
    "Company Industry",
    "Company Size",
    "Country",
    "State",
    "City",
    "LinkedIn URL",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ZohoCrm;

fn text<T: AsRef<str>>(value: Option<T>) -> String {
    value.map(|v| v.as_ref().to_string()).unwrap_or_default()
}

impl CrmAdapter for ZohoCrm {
    fn contact_headers(&self) -> &'static [&'static str] {
        CONTACT_HEADERS
    }

    fn contact_row(&self, contact: &Contact) -> Vec<String> {
        let company = contact.company.as_ref();
        vec![
            contact.first_name.to_string(),
            contact.last_name.to_string(),
            text(contact.email.as_ref().map(|e| e.as_str())),
            text(contact.phone.as_deref()),
            text(contact.job_title.as_deref()),
            text(contact.department.as_deref()),
            text(contact.seniority_level.as_deref()),
            text(company.map(|c| c.name.as_str())),
            text(company.and_then(|c| c.website.as_ref()).map(|w| w.as_str())),
            text(company.and_then(|c| c.industry.as_deref())),
            text(company.and_then(|c| c.company_size.as_deref())),
            text(contact.location_country.as_deref()),
            text(contact.location_state.as_deref()),
            text(contact.location_city.as_deref()),
            text(contact.linkedin_url.as_ref().map(|u| u.as_str())),
            text(contact.twitter_url.as_ref().map(|u| u.as_str())),
            contact.lead_score.to_string(),
        ]
    }

    fn company_headers(&self) -> &'static [&'static str] {
        COMPANY_HEADERS
    }

    fn company_row(&self, company: &Company) -> Vec<String> {
        vec![
            company.name.to_string(),
            text(company.website.as_ref().map(|w| w.as_str())),
            text(company.industry.as_deref()),
            text(company.company_size.as_deref()),
            text(company.location_country.as_deref()),
            text(company.location_state.as_deref()),
            text(company.location_city.as_deref()),
            company
                .founded_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            text(company.funding_status.as_deref()),
            text(company.linkedin_url.as_ref().map(|u| u.as_str())),
            text(company.phone.as_deref()),
            text(company.description.as_deref()),
        ]
    }

    fn template_headers(&self) -> &'static [&'static str] {
        TEMPLATE_HEADERS
    }

    fn template_sample(&self) -> Vec<String> {
        [
            "John",
            "Doe",
            "john.doe@example.com",
            "+1-555-123-4567",
            "CEO",
            "Example Corp",
            "https://example.com",
            "Technology",
            "50-100",
            "United States",
            "California",
            "San Francisco",
            "https://linkedin.com/in/johndoe",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn template_filename(&self) -> &'static str {
        "zoho_crm_template.csv"
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{
        CompanyId, CompanyName, ContactEmail, ContactId, LeadScore, PersonName, WebUrl,
    };

    fn company() -> Company {
        let now = Utc::now().naive_utc();
        Company {
            id: CompanyId::new(1).unwrap(),
            name: CompanyName::new("TechFlow Solutions").unwrap(),
            domain: Some("techflow.io".into()),
            website: Some(WebUrl::new("https://techflow.io").unwrap()),
            industry: Some("Technology".into()),
            company_size: Some("50-100".into()),
            location_country: Some("United States".into()),
            location_state: Some("California".into()),
            location_city: Some("San Francisco".into()),
            founded_year: Some(2018),
            funding_status: Some("Series B".into()),
            funding_amount: Some(25_000_000.0),
            technology_stack: None,
            description: Some("AI workflows, automated".into()),
            linkedin_url: None,
            phone: None,
            created_at: now,
            updated_at: now,
            contact_count: 2,
        }
    }

    fn contact(company: Option<Company>) -> Contact {
        let now = Utc::now().naive_utc();
        Contact {
            id: ContactId::new(7).unwrap(),
            company_id: company.as_ref().map(|c| c.id),
            first_name: PersonName::new("Sarah").unwrap(),
            last_name: PersonName::new("Johnson").unwrap(),
            email: Some(ContactEmail::new("sarah@techflow.io").unwrap()),
            phone: None,
            job_title: Some("CEO".into()),
            department: Some("Executive".into()),
            seniority_level: Some("C-Level".into()),
            linkedin_url: None,
            twitter_url: None,
            location_country: Some("United States".into()),
            location_state: None,
            location_city: None,
            lead_score: LeadScore::new(95).unwrap(),
            last_activity_date: None,
            created_at: now,
            updated_at: now,
            company,
        }
    }

    #[test]
    fn contact_row_matches_headers() {
        let row = ZohoCrm.contact_row(&contact(Some(company())));
        assert_eq!(row.len(), CONTACT_HEADERS.len());
        assert_eq!(row[7], "TechFlow Solutions");
        assert_eq!(row[8], "https://techflow.io");
        assert_eq!(row[16], "95");
    }

    #[test]
    fn contact_without_company_has_blank_company_columns() {
        let row = ZohoCrm.contact_row(&contact(None));
        assert!(row[7..11].iter().all(String::is_empty));
    }

    #[test]
    fn company_export_quotes_description() {
        let csv = ZohoCrm.export_companies(&[company()]).unwrap();
        let mut lines = csv.split("\r\n");
        assert_eq!(lines.next(), Some(COMPANY_HEADERS.join(",").as_str()));
        let row = lines.next().unwrap();
        assert!(row.starts_with("TechFlow Solutions,https://techflow.io,Technology"));
        assert!(row.ends_with(",,\"AI workflows, automated\""));
    }

    #[test]
    fn template_has_header_and_sample() {
        let csv = ZohoCrm.template().unwrap();
        let lines: Vec<&str> = csv.trim_end().split("\r\n").collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("John,Doe,john.doe@example.com"));
        assert_eq!(ZohoCrm.template_sample().len(), TEMPLATE_HEADERS.len());
    }
}
