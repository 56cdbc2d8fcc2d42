//! Lead lists and their membership.

use crate::domain::lead_list::{LeadList, NewLeadList};
use crate::domain::types::LeadListId;
use crate::dto::contact::contact_responses;
use crate::dto::lead_list::{
    AddContactsResponse, LeadListDetail, LeadListPage, LeadListStatsResponse, MessageResponse,
};
use crate::forms::lead_list::{ContactIdsForm, LeadListForm, PageQuery, UpdateLeadListForm};
use crate::pagination::{PageMeta, page_window};
use crate::repository::errors::RepositoryError;
use crate::repository::{LeadListReader, LeadListWriter};
use crate::services::contacts::contact_id;
use crate::services::{ServiceError, ServiceResult};

pub(crate) fn lead_list_id(id: i32) -> ServiceResult<LeadListId> {
    LeadListId::new(id).map_err(|_| ServiceError::not_found("Lead list"))
}

pub(crate) fn find_lead_list<R>(repo: &R, id: i32) -> ServiceResult<LeadList>
where
    R: LeadListReader + ?Sized,
{
    repo.get_lead_list_by_id(lead_list_id(id)?)?
        .ok_or_else(|| ServiceError::not_found("Lead list"))
}

pub fn list_lead_lists<R>(repo: &R, query: PageQuery) -> ServiceResult<LeadListPage>
where
    R: LeadListReader + ?Sized,
{
    let window = page_window(query.page, query.per_page);
    let (total, lists) = repo.list_lead_lists(Some(window)).map_err(|err| {
        log::error!("Failed to list lead lists: {err}");
        err
    })?;

    Ok(LeadListPage {
        lists,
        meta: PageMeta::new(total, window),
    })
}

pub fn create_lead_list<R>(repo: &R, form: LeadListForm) -> ServiceResult<LeadList>
where
    R: LeadListWriter + ?Sized,
{
    let new_list = NewLeadList::try_from(form)?;
    let list = repo.create_lead_list(&new_list).map_err(|err| {
        log::error!("Failed to create lead list: {err}");
        err
    })?;
    Ok(list)
}

/// The list with one page of its members, newest additions first.
pub fn get_lead_list<R>(repo: &R, id: i32, query: PageQuery) -> ServiceResult<LeadListDetail>
where
    R: LeadListReader + ?Sized,
{
    let list = find_lead_list(repo, id)?;
    let window = page_window(query.page, query.per_page);

    let (total, contacts) = repo
        .list_lead_list_contacts(list.id, Some(window))
        .map_err(|err| {
            log::error!("Failed to load contacts of list {id}: {err}");
            err
        })?;

    Ok(LeadListDetail::new(
        list,
        contact_responses(contacts),
        PageMeta::new(total, window),
    ))
}

pub fn update_lead_list<R>(repo: &R, id: i32, form: UpdateLeadListForm) -> ServiceResult<LeadList>
where
    R: LeadListReader + LeadListWriter + ?Sized,
{
    let current = find_lead_list(repo, id)?;
    let updates = form.apply(&current)?;

    let list = repo.update_lead_list(current.id, &updates).map_err(|err| {
        log::error!("Failed to update lead list {id}: {err}");
        err
    })?;
    Ok(list)
}

pub fn delete_lead_list<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: LeadListWriter + ?Sized,
{
    repo.delete_lead_list(lead_list_id(id)?)
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::not_found("Lead list"),
            err => {
                log::error!("Failed to delete lead list {id}: {err}");
                ServiceError::from(err)
            }
        })
}

/// Adds contacts to a list; unknown and already-present contacts are skipped.
pub fn add_contacts<R>(repo: &R, id: i32, form: ContactIdsForm) -> ServiceResult<AddContactsResponse>
where
    R: LeadListReader + LeadListWriter + ?Sized,
{
    let list = find_lead_list(repo, id)?;
    let contact_ids = form.contact_ids();

    let added = if contact_ids.is_empty() {
        0
    } else {
        repo.add_contacts_to_lead_list(list.id, &contact_ids)
            .map_err(|err| {
                log::error!("Failed to add contacts to list {id}: {err}");
                err
            })?
    };

    let list = if added > 0 {
        find_lead_list(repo, id)?
    } else {
        list
    };

    Ok(AddContactsResponse {
        message: format!("Added {added} contacts to list"),
        list,
    })
}

pub fn remove_contact<R>(repo: &R, id: i32, contact: i32) -> ServiceResult<MessageResponse>
where
    R: LeadListWriter + ?Sized,
{
    let list_id = lead_list_id(id)?;
    let contact_id = contact_id(contact)
        .map_err(|_| ServiceError::NotFound("Contact not in list".to_string()))?;

    let removed = repo
        .remove_contacts_from_lead_list(list_id, &[contact_id])
        .map_err(|err| {
            log::error!("Failed to remove contact {contact} from list {id}: {err}");
            err
        })?;

    if removed == 0 {
        return Err(ServiceError::NotFound("Contact not in list".to_string()));
    }

    Ok(MessageResponse {
        message: "Contact removed from list".to_string(),
    })
}

pub fn remove_contacts<R>(repo: &R, id: i32, form: ContactIdsForm) -> ServiceResult<MessageResponse>
where
    R: LeadListReader + LeadListWriter + ?Sized,
{
    let list = find_lead_list(repo, id)?;
    let contact_ids = form.contact_ids();

    let removed = if contact_ids.is_empty() {
        0
    } else {
        repo.remove_contacts_from_lead_list(list.id, &contact_ids)
            .map_err(|err| {
                log::error!("Failed to remove contacts from list {id}: {err}");
                err
            })?
    };

    Ok(MessageResponse {
        message: format!("Removed {removed} contacts from list"),
    })
}

pub fn lead_list_stats<R>(repo: &R) -> ServiceResult<LeadListStatsResponse>
where
    R: LeadListReader + ?Sized,
{
    let stats = repo.lead_list_stats().map_err(|err| {
        log::error!("Failed to compute list stats: {err}");
        err
    })?;
    Ok(LeadListStatsResponse::from(stats))
}
