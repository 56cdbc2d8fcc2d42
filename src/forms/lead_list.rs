use serde::Deserialize;
use validator::Validate;

use crate::domain::lead_list::{LeadList, NewLeadList, UpdateLeadList};
use crate::domain::types::{ContactId, LeadListName, sanitize_text};
use crate::forms::{FormError, double_option};

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for creating a lead list.
pub struct LeadListForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub created_by: Option<String>,
}

impl TryFrom<LeadListForm> for NewLeadList {
    type Error = FormError;

    fn try_from(form: LeadListForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewLeadList::new(
            LeadListName::new(form.name)?,
            sanitize_text(form.description),
            form.created_by,
        ))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Partial list update; only name and description can change.
pub struct UpdateLeadListForm {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl UpdateLeadListForm {
    pub fn apply(self, current: &LeadList) -> Result<UpdateLeadList, FormError> {
        self.validate()?;

        let name = match self.name {
            Some(name) => LeadListName::new(name)?,
            None => current.name.clone(),
        };
        let description = match self.description {
            Some(description) => sanitize_text(description),
            None => current.description.clone(),
        };

        Ok(UpdateLeadList { name, description })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Body carrying a set of contact ids.
pub struct ContactIdsForm {
    #[serde(default)]
    pub contact_ids: Vec<i32>,
}

impl ContactIdsForm {
    /// Positive, de-duplicated ids; non-positive ids never match a contact.
    pub fn contact_ids(&self) -> Vec<ContactId> {
        let mut ids: Vec<ContactId> = self
            .contact_ids
            .iter()
            .filter_map(|id| ContactId::new(*id).ok())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

/// Query string for paging a list's members.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_by_defaults_to_system() {
        let form: LeadListForm = serde_json::from_value(json!({"name": "Tech CEOs"})).unwrap();
        let list = NewLeadList::try_from(form).unwrap();
        assert_eq!(list.created_by, "system");
    }

    #[test]
    fn blank_name_is_rejected() {
        let form: LeadListForm = serde_json::from_value(json!({"name": ""})).unwrap();
        assert!(NewLeadList::try_from(form).is_err());
    }

    #[test]
    fn contact_ids_are_deduplicated() {
        let form = ContactIdsForm {
            contact_ids: vec![3, 1, 3, 0, -2],
        };
        let ids: Vec<i32> = form.contact_ids().into_iter().map(|id| id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
