//! Diesel models for lead lists and their membership table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    lead_list::{LeadList as DomainLeadList, NewLeadList as DomainNewLeadList, UpdateLeadList as DomainUpdateLeadList},
    types::{LeadListId, LeadListName, TypeConstraintError},
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::lead_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LeadList {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::lead_lists)]
pub struct NewLeadList<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub created_by: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::lead_lists)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateLeadList<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::lead_list_contacts)]
/// Membership row linking a contact to a list.
pub struct NewLeadListContact {
    pub list_id: i32,
    pub contact_id: i32,
}

impl TryFrom<LeadList> for DomainLeadList {
    type Error = TypeConstraintError;

    fn try_from(list: LeadList) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadListId::new(list.id)?,
            name: LeadListName::new(list.name)?,
            description: list.description,
            created_by: list.created_by,
            created_at: list.created_at,
            updated_at: list.updated_at,
            contact_count: 0,
        })
    }
}

impl<'a> From<&'a DomainNewLeadList> for NewLeadList<'a> {
    fn from(list: &'a DomainNewLeadList) -> Self {
        Self {
            name: list.name.as_str(),
            description: list.description.as_deref(),
            created_by: list.created_by.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateLeadList> for UpdateLeadList<'a> {
    fn from(list: &'a DomainUpdateLeadList) -> Self {
        Self {
            name: list.name.as_str(),
            description: list.description.as_deref(),
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
