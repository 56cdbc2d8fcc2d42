use serde::Deserialize;

use crate::domain::contact::NewContact;
use crate::domain::types::normalize_optional;
use crate::forms::FormError;
use crate::forms::contact::ContactForm;
use crate::repository::ContactFilter;

/// Query string of `GET /api/leads`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadQuery {
    pub search: Option<String>,
    pub min_score: Option<i32>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl From<&LeadQuery> for ContactFilter {
    fn from(query: &LeadQuery) -> Self {
        Self {
            search: normalize_optional(query.search.clone()),
            min_score: query.min_score,
            ..Default::default()
        }
    }
}

/// Builds a lead from a contact payload; any client-supplied score is replaced
/// by the computed one.
pub fn new_lead(form: ContactForm) -> Result<NewContact, FormError> {
    let contact = NewContact::try_from(ContactForm {
        lead_score: None,
        ..form
    })?;
    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lead_score_is_always_computed() {
        let form: ContactForm = serde_json::from_value(json!({
            "first_name": "Michael",
            "last_name": "Chen",
            "job_title": "CTO",
            "lead_score": 3
        }))
        .unwrap();
        let lead = new_lead(form).unwrap();
        assert_eq!(lead.lead_score.get(), 25);
    }

    #[test]
    fn query_maps_to_filter() {
        let query = LeadQuery {
            search: Some("  chen ".into()),
            min_score: Some(60),
            ..Default::default()
        };
        let filter = ContactFilter::from(&query);
        assert_eq!(filter.search.as_deref(), Some("chen"));
        assert_eq!(filter.min_score, Some(60));
    }
}
