use serde::Deserialize;

use crate::domain::types::LeadListId;
use crate::forms::FormError;
use crate::forms::company::CompanySearchFilters;
use crate::forms::contact::ContactSearchFilters;
use crate::repository::ContactFilter;

/// Body of `POST /api/export/contacts/csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactExportForm {
    #[serde(default)]
    pub filters: ContactSearchFilters,
    /// Exports the list's members instead of applying `filters`.
    pub list_id: Option<i32>,
}

/// What a contact export reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactExportSource {
    List(LeadListId),
    Filter(ContactFilter),
}

impl TryFrom<ContactExportForm> for ContactExportSource {
    type Error = FormError;

    fn try_from(form: ContactExportForm) -> Result<Self, Self::Error> {
        if let Some(id) = form.list_id {
            return Ok(Self::List(LeadListId::new(id)?));
        }

        // Exports only narrow on the presence flags, never on their absence.
        let mut filter = ContactFilter::from(ContactSearchFilters {
            lead_score_range: None,
            ..form.filters
        });
        filter.has_email = filter.has_email.filter(|flag| *flag);
        filter.has_phone = filter.has_phone.filter(|flag| *flag);

        Ok(Self::Filter(filter))
    }
}

/// Body of `POST /api/export/companies/csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyExportForm {
    #[serde(default)]
    pub filters: CompanySearchFilters,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_id_takes_precedence() {
        let form: ContactExportForm = serde_json::from_value(json!({
            "list_id": 4,
            "filters": {"job_titles": ["CEO"]}
        }))
        .unwrap();
        assert_eq!(
            ContactExportSource::try_from(form).unwrap(),
            ContactExportSource::List(LeadListId::new(4).unwrap())
        );
    }

    #[test]
    fn false_flags_do_not_filter() {
        let form: ContactExportForm = serde_json::from_value(json!({
            "filters": {"has_email": false, "has_phone": true, "lead_score_range": {"min": 90}}
        }))
        .unwrap();
        let ContactExportSource::Filter(filter) = ContactExportSource::try_from(form).unwrap()
        else {
            panic!("expected a filter export");
        };
        assert_eq!(filter.has_email, None);
        assert_eq!(filter.has_phone, Some(true));
        assert_eq!(filter.min_score, None);
    }

    #[test]
    fn invalid_list_id_is_rejected() {
        let form = ContactExportForm {
            list_id: Some(0),
            ..Default::default()
        };
        assert!(ContactExportSource::try_from(form).is_err());
    }
}
