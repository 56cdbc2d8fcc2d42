//! Leads are contacts ranked by score.

use crate::dto::contact::{ContactResponse, LeadPage, contact_responses};
use crate::forms::contact::ContactForm;
use crate::forms::lead::{LeadQuery, new_lead};
use crate::pagination::{PageMeta, page_window};
use crate::repository::{ContactFilter, ContactListQuery, ContactOrder, ContactReader, ContactWriter};
use crate::services::ServiceResult;
use crate::services::contacts::store_contact;

/// Contacts ordered by lead score, highest first.
pub fn list_leads<R>(repo: &R, query: LeadQuery) -> ServiceResult<LeadPage>
where
    R: ContactReader + ?Sized,
{
    let window = page_window(query.page, query.per_page);
    let list_query = ContactListQuery::new(ContactFilter::from(&query))
        .order_by(ContactOrder::LeadScore)
        .paginate(window.page, window.per_page);

    let (total, leads) = repo.list_contacts(list_query).map_err(|err| {
        log::error!("Failed to list leads: {err}");
        err
    })?;

    Ok(LeadPage {
        leads: contact_responses(leads),
        meta: PageMeta::new(total, window),
    })
}

/// Creates a contact whose score is always computed.
pub fn create_lead<R>(repo: &R, form: ContactForm) -> ServiceResult<ContactResponse>
where
    R: ContactWriter + ?Sized,
{
    store_contact(repo, new_lead(form)?)
}
