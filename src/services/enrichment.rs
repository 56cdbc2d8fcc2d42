//! Deterministic contact and company enrichment.
//!
//! Everything is derived from data already stored: titles, names, company
//! domains and the addresses of colleagues. No external lookups are made.

use crate::domain::company::NewCompany;
use crate::domain::contact::{Contact, NewContact};
use crate::domain::email_patterns::{
    clean_name, department_from_title, detect_company_pattern, extract_domain_from_website,
    generate_email_candidates, is_valid_email_format, pattern_score, seniority_from_title,
};
use crate::domain::types::{ContactEmail, WebUrl};
use crate::dto::contact::ContactResponse;
use crate::dto::enrichment::{
    BulkEnrichment, CompanyEnrichment, ContactEnrichment, EmailCheck, EmailValidation,
};
use crate::forms::enrichment::{BulkEnrichForm, EmailValidationForm};
use crate::repository::{CompanyReader, CompanyWriter, ContactReader, ContactWriter};
use crate::services::ServiceResult;
use crate::services::companies::get_company;
use crate::services::contacts::find_contact;

/// Fills the gaps of `contact` and rescores it.
///
/// Returns the enriched values and, when the email is unknown, the guessed
/// candidates. A guess is only stored when `colleague_emails` reveal the
/// company's address pattern.
pub fn enriched(contact: &Contact, colleague_emails: &[String]) -> (NewContact, Vec<String>) {
    let mut updated = NewContact::from(contact.clone());

    if let Some(title) = updated.job_title.as_deref() {
        if updated.department.is_none() {
            updated.department = Some(department_from_title(title).to_string());
        }
        if updated.seniority_level.is_none() {
            updated.seniority_level = Some(seniority_from_title(title).to_string());
        }
    }

    if updated.linkedin_url.is_none() {
        let first = clean_name(updated.first_name.as_str());
        let last = clean_name(updated.last_name.as_str());
        if !first.is_empty() && !last.is_empty() {
            updated.linkedin_url =
                WebUrl::new(format!("https://linkedin.com/in/{first}-{last}")).ok();
        }
    }

    let mut candidates = Vec::new();
    if updated.email.is_none() {
        if let Some(domain) = contact.company.as_ref().and_then(|c| c.email_domain()) {
            let pattern = detect_company_pattern(colleague_emails.iter().map(String::as_str));
            candidates = generate_email_candidates(
                updated.first_name.as_str(),
                updated.last_name.as_str(),
                &domain,
                pattern,
            );
            if pattern.is_some() {
                updated.email = candidates.first().and_then(|e| ContactEmail::new(e.as_str()).ok());
            }
        }
    }

    (updated.scored(), candidates)
}

pub fn enrich_contact<R>(repo: &R, id: i32) -> ServiceResult<ContactEnrichment>
where
    R: ContactReader + ContactWriter + ?Sized,
{
    let contact = find_contact(repo, id)?;

    let colleague_emails = match contact.company_id {
        Some(company_id) if contact.email.is_none() => repo.list_company_emails(company_id)?,
        _ => Vec::new(),
    };

    let (updates, email_candidates) = enriched(&contact, &colleague_emails);
    let contact = repo.update_contact(contact.id, &updates).map_err(|err| {
        log::error!("Failed to store enrichment of contact {id}: {err}");
        err
    })?;

    Ok(ContactEnrichment {
        success: true,
        contact: ContactResponse::from(contact),
        email_candidates,
    })
}

/// Derives the mail domain from the website when it is missing.
pub fn enrich_company<R>(repo: &R, id: i32) -> ServiceResult<CompanyEnrichment>
where
    R: CompanyReader + CompanyWriter + ?Sized,
{
    let company = get_company(repo, id)?;

    let domain = match (&company.domain, &company.website) {
        (None, Some(website)) => {
            Some(extract_domain_from_website(website.as_str())).filter(|d| !d.is_empty())
        }
        _ => None,
    };

    let company = match domain {
        Some(domain) => {
            let company_id = company.id;
            let updates = NewCompany {
                domain: Some(domain),
                ..NewCompany::from(company)
            };
            repo.update_company(company_id, &updates).map_err(|err| {
                log::error!("Failed to store enrichment of company {id}: {err}");
                err
            })?
        }
        None => company,
    };

    Ok(CompanyEnrichment {
        success: true,
        company,
    })
}

/// Enriches each contact independently; failures are counted, not raised.
pub fn bulk_enrich<R>(repo: &R, form: BulkEnrichForm) -> ServiceResult<BulkEnrichment>
where
    R: ContactReader + ContactWriter + ?Sized,
{
    let ids = form.ids()?;
    let mut enriched_count = 0;
    let mut failed_count = 0;

    for id in &ids {
        match enrich_contact(repo, *id) {
            Ok(_) => enriched_count += 1,
            Err(err) => {
                log::warn!("Skipping contact {id} during bulk enrichment: {err}");
                failed_count += 1;
            }
        }
    }

    Ok(BulkEnrichment {
        success: true,
        enriched_count,
        failed_count,
        total_processed: ids.len(),
    })
}

pub fn validate_emails(form: EmailValidationForm) -> ServiceResult<EmailValidation> {
    let results: Vec<EmailCheck> = form
        .emails()?
        .into_iter()
        .map(|email| {
            let email = email.trim().to_lowercase();
            EmailCheck {
                is_valid: is_valid_email_format(&email),
                pattern_score: pattern_score(&email),
                email,
            }
        })
        .collect();

    let valid_count = results.iter().filter(|r| r.is_valid).count();
    Ok(EmailValidation {
        success: true,
        total_checked: results.len(),
        valid_count,
        results,
    })
}
