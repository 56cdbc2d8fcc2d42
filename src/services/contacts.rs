//! Contact CRUD, search and statistics.

use crate::domain::contact::{Contact, NewContact};
use crate::domain::types::ContactId;
use crate::dto::contact::{
    BulkContactsResponse, ContactPage, ContactResponse, ContactStatsResponse, contact_responses,
};
use crate::forms::contact::{
    BulkContactsForm, ContactForm, ContactQuery, ContactSearchForm, UpdateContactForm,
};
use crate::pagination::{PageMeta, page_window};
use crate::repository::errors::RepositoryError;
use crate::repository::{ContactFilter, ContactListQuery, ContactReader, ContactWriter};
use crate::services::{ServiceError, ServiceResult};

pub(crate) fn contact_id(id: i32) -> ServiceResult<ContactId> {
    ContactId::new(id).map_err(|_| ServiceError::not_found("Contact"))
}

fn contact_page<R>(
    repo: &R,
    filter: ContactFilter,
    page: Option<i64>,
    per_page: Option<i64>,
) -> ServiceResult<ContactPage>
where
    R: ContactReader + ?Sized,
{
    let window = page_window(page, per_page);
    let (total, contacts) = repo
        .list_contacts(ContactListQuery::new(filter).paginate(window.page, window.per_page))
        .map_err(|err| {
            log::error!("Failed to list contacts: {err}");
            err
        })?;

    Ok(ContactPage {
        contacts: contact_responses(contacts),
        meta: PageMeta::new(total, window),
        filters_applied: None,
    })
}

pub fn list_contacts<R>(repo: &R, query: ContactQuery) -> ServiceResult<ContactPage>
where
    R: ContactReader + ?Sized,
{
    contact_page(repo, ContactFilter::from(&query), query.page, query.per_page)
}

pub fn search_contacts<R>(repo: &R, form: ContactSearchForm) -> ServiceResult<ContactPage>
where
    R: ContactReader + ?Sized,
{
    let filter = ContactFilter::from(form.filters.clone());
    let mut page = contact_page(repo, filter, form.page, form.per_page)?;
    page.filters_applied = Some(form.filters);
    Ok(page)
}

pub(crate) fn find_contact<R>(repo: &R, id: i32) -> ServiceResult<Contact>
where
    R: ContactReader + ?Sized,
{
    repo.get_contact_by_id(contact_id(id)?)?
        .ok_or_else(|| ServiceError::not_found("Contact"))
}

pub fn get_contact<R>(repo: &R, id: i32) -> ServiceResult<ContactResponse>
where
    R: ContactReader + ?Sized,
{
    find_contact(repo, id).map(ContactResponse::from)
}

/// Stores one contact, scoring it when no score was supplied.
pub(crate) fn store_contact<R>(repo: &R, new_contact: NewContact) -> ServiceResult<ContactResponse>
where
    R: ContactWriter + ?Sized,
{
    let mut created = repo
        .create_contacts(std::slice::from_ref(&new_contact))
        .map_err(|err| {
            log::error!("Failed to create contact: {err}");
            err
        })?;

    created
        .pop()
        .map(ContactResponse::from)
        .ok_or_else(|| ServiceError::Internal("Contact was not created".to_string()))
}

pub fn create_contact<R>(repo: &R, form: ContactForm) -> ServiceResult<ContactResponse>
where
    R: ContactWriter + ?Sized,
{
    store_contact(repo, NewContact::try_from(form)?)
}

/// Applies a partial update and rescores unless a score was given.
pub fn update_contact<R>(
    repo: &R,
    id: i32,
    form: UpdateContactForm,
) -> ServiceResult<ContactResponse>
where
    R: ContactReader + ContactWriter + ?Sized,
{
    let current = find_contact(repo, id)?;
    let contact_id = current.id;
    let updates = form.apply(NewContact::from(current))?;

    let updated = repo.update_contact(contact_id, &updates).map_err(|err| {
        log::error!("Failed to update contact {id}: {err}");
        err
    })?;

    Ok(ContactResponse::from(updated))
}

pub fn delete_contact<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ContactWriter + ?Sized,
{
    repo.delete_contact(contact_id(id)?).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::not_found("Contact"),
        err => {
            log::error!("Failed to delete contact {id}: {err}");
            ServiceError::from(err)
        }
    })
}

/// Creates all contacts or none.
pub fn bulk_create_contacts<R>(
    repo: &R,
    form: BulkContactsForm,
) -> ServiceResult<BulkContactsResponse>
where
    R: ContactWriter + ?Sized,
{
    let new_contacts = Vec::<NewContact>::try_from(form)?;

    let contacts = repo.create_contacts(&new_contacts).map_err(|err| {
        log::error!("Failed to bulk create contacts: {err}");
        err
    })?;

    Ok(BulkContactsResponse {
        message: format!("Successfully created {} contacts", contacts.len()),
        contacts: contact_responses(contacts),
    })
}

pub fn contact_stats<R>(repo: &R) -> ServiceResult<ContactStatsResponse>
where
    R: ContactReader + ?Sized,
{
    let stats = repo.contact_stats().map_err(|err| {
        log::error!("Failed to compute contact stats: {err}");
        err
    })?;
    Ok(ContactStatsResponse::from(stats))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::stats::ContactStats;
    use crate::domain::types::LeadScore;
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures;

    #[test]
    fn list_maps_query_flags() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts()
            .withf(|query| {
                query.filter.has_email == Some(false)
                    && query.filter.company_name.as_deref() == Some("Acme")
            })
            .returning(|_| Ok((1, vec![fixtures::contact(1, "Ann", "Lee")])));

        let query = ContactQuery {
            has_email: Some("false".into()),
            company_name: Some("Acme".into()),
            ..Default::default()
        };
        let page = list_contacts(&repo, query).unwrap();

        assert_eq!(page.contacts[0].full_name, "Ann Lee");
        assert_eq!(page.meta.pages, 1);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn search_passes_multi_value_filters() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts()
            .withf(|query| {
                query.filter.seniority_levels == vec!["C-Level".to_string()]
                    && query.filter.min_score == Some(70)
            })
            .returning(|_| Ok((0, vec![])));

        let form: ContactSearchForm = serde_json::from_value(json!({
            "filters": {"seniority_levels": ["C-Level"], "lead_score_range": {"min": 70}},
            "per_page": 500
        }))
        .unwrap();
        let page = search_contacts(&repo, form).unwrap();
        assert_eq!(page.meta.per_page, 100);
        assert!(page.filters_applied.is_some());
    }

    #[test]
    fn create_scores_contact() {
        let mut repo = MockRepository::new();
        repo.expect_create_contacts()
            .withf(|contacts| contacts[0].lead_score.get() == 30)
            .returning(|contacts| {
                let mut stored = fixtures::contact(5, "Emily", "Rodriguez");
                stored.lead_score = contacts[0].lead_score;
                Ok(vec![stored])
            });

        let form: ContactForm = serde_json::from_value(json!({
            "first_name": "Emily",
            "last_name": "Rodriguez",
            "job_title": "Founder"
        }))
        .unwrap();
        let created = create_contact(&repo, form).unwrap();
        assert_eq!(created.contact.lead_score, LeadScore::new(30).unwrap());
    }

    #[test]
    fn update_missing_contact_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_contact_by_id().returning(|_| Ok(None));
        repo.expect_update_contact().times(0);

        let result = update_contact(&repo, 12, UpdateContactForm::default());
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn update_rescores_merged_contact() {
        let mut repo = MockRepository::new();
        repo.expect_get_contact_by_id()
            .returning(|_| Ok(Some(fixtures::contact(2, "Ann", "Lee"))));
        repo.expect_update_contact()
            .withf(|id, contact| id.get() == 2 && contact.lead_score.get() == 25)
            .returning(|_, contact| {
                let mut stored = fixtures::contact(2, "Ann", "Lee");
                stored.job_title = contact.job_title.clone();
                stored.lead_score = contact.lead_score;
                Ok(stored)
            });

        let form: UpdateContactForm = serde_json::from_value(json!({"job_title": "CFO"})).unwrap();
        let updated = update_contact(&repo, 2, form).unwrap();
        assert_eq!(updated.contact.job_title.as_deref(), Some("CFO"));
    }

    #[test]
    fn foreign_key_failure_is_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_contacts()
            .returning(|_| Err(RepositoryError::InvalidReference("company".into())));

        let form: ContactForm = serde_json::from_value(json!({
            "first_name": "A",
            "last_name": "B",
            "company_id": 999
        }))
        .unwrap();
        assert!(matches!(
            create_contact(&repo, form),
            Err(ServiceError::Conflict(_))
        ));
    }

    #[test]
    fn bulk_requires_contacts() {
        let mut repo = MockRepository::new();
        repo.expect_create_contacts().times(0);

        let form: BulkContactsForm = serde_json::from_value(json!({"contacts": []})).unwrap();
        assert!(matches!(
            bulk_create_contacts(&repo, form),
            Err(ServiceError::BadRequest(_))
        ));
    }

    #[test]
    fn stats_are_converted() {
        let mut repo = MockRepository::new();
        repo.expect_contact_stats().returning(|| {
            Ok(ContactStats {
                total_contacts: 10,
                contacts_with_email: 10,
                contacts_with_phone: 5,
                ..Default::default()
            })
        });

        let stats = contact_stats(&repo).unwrap();
        assert_eq!(stats.email_coverage, 100.0);
        assert_eq!(stats.phone_coverage, 50.0);
    }
}
