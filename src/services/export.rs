//! CSV exports in a CRM's import layout.

use chrono::{NaiveDateTime, SecondsFormat};

use crate::crm::CrmAdapter;
use crate::dto::export::{CompanyExport, ContactExport, ListExport, TemplateExport};
use crate::forms::export::{CompanyExportForm, ContactExportForm, ContactExportSource};
use crate::repository::{
    CompanyFilter, CompanyListQuery, CompanyReader, ContactListQuery, ContactReader,
    LeadListReader,
};
use crate::services::lead_lists::find_lead_list;
use crate::services::{ServiceError, ServiceResult};

const TEMPLATE_DESCRIPTION: &str = "Template for Zoho CRM import with sample data";

fn file_stamp(at: NaiveDateTime) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

fn iso_timestamp(at: NaiveDateTime) -> String {
    at.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Exports the members of a list, or every contact matching the filters.
pub fn export_contacts<R, C>(
    repo: &R,
    crm: &C,
    form: ContactExportForm,
    at: NaiveDateTime,
) -> ServiceResult<ContactExport>
where
    R: ContactReader + LeadListReader + ?Sized,
    C: CrmAdapter + ?Sized,
{
    let source = ContactExportSource::try_from(form)
        .map_err(|_| ServiceError::not_found("Lead list"))?;

    let contacts = match source {
        ContactExportSource::List(list_id) => {
            repo.get_lead_list_by_id(list_id)?
                .ok_or_else(|| ServiceError::not_found("Lead list"))?;
            repo.list_lead_list_contacts(list_id, None)?.1
        }
        ContactExportSource::Filter(filter) => {
            repo.list_contacts(ContactListQuery::new(filter))?.1
        }
    };

    let csv_data = crm.export_contacts(&contacts).map_err(|err| {
        log::error!("Failed to write contact export: {err}");
        err
    })?;

    Ok(ContactExport {
        csv_data,
        filename: format!("leads_export_{}.csv", file_stamp(at)),
        total_contacts: contacts.len(),
        export_timestamp: iso_timestamp(at),
    })
}

pub fn export_list<R, C>(repo: &R, crm: &C, id: i32, at: NaiveDateTime) -> ServiceResult<ListExport>
where
    R: LeadListReader + ?Sized,
    C: CrmAdapter + ?Sized,
{
    let list = find_lead_list(repo, id)?;
    let (_, contacts) = repo.list_lead_list_contacts(list.id, None).map_err(|err| {
        log::error!("Failed to load contacts of list {id}: {err}");
        err
    })?;

    let csv_data = crm.export_contacts(&contacts).map_err(|err| {
        log::error!("Failed to write list export: {err}");
        err
    })?;

    Ok(ListExport {
        csv_data,
        filename: format!(
            "{}_{}.csv",
            list.name.as_str().replace(' ', "_"),
            file_stamp(at)
        ),
        list_name: list.name.to_string(),
        total_contacts: contacts.len(),
        export_timestamp: iso_timestamp(at),
    })
}

pub fn export_companies<R, C>(
    repo: &R,
    crm: &C,
    form: CompanyExportForm,
    at: NaiveDateTime,
) -> ServiceResult<CompanyExport>
where
    R: CompanyReader + ?Sized,
    C: CrmAdapter + ?Sized,
{
    let query = CompanyListQuery::new(CompanyFilter::from(form.filters));
    let (_, companies) = repo.list_companies(query).map_err(|err| {
        log::error!("Failed to load companies for export: {err}");
        err
    })?;

    let csv_data = crm.export_companies(&companies).map_err(|err| {
        log::error!("Failed to write company export: {err}");
        err
    })?;

    Ok(CompanyExport {
        csv_data,
        filename: format!("companies_export_{}.csv", file_stamp(at)),
        total_companies: companies.len(),
        export_timestamp: iso_timestamp(at),
    })
}

/// Empty import template with one sample row.
pub fn import_template<C>(crm: &C) -> ServiceResult<TemplateExport>
where
    C: CrmAdapter + ?Sized,
{
    Ok(TemplateExport {
        csv_data: crm.template()?,
        filename: crm.template_filename().to_string(),
        description: TEMPLATE_DESCRIPTION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;
    use crate::crm::ZohoCrm;
    use crate::domain::types::LeadListId;
    use crate::repository::Pagination;
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures;

    #[test]
    fn filtered_export_reads_every_match() {
        let mut repo = MockRepository::new();
        repo.expect_list_contacts()
            .withf(|query| query.pagination.is_none() && query.filter.has_email == Some(true))
            .returning(|_| {
                let acme = fixtures::company(1, "Acme");
                Ok((
                    2,
                    vec![
                        fixtures::with_email(
                            fixtures::contact_at(1, "Ann", "Lee", acme.clone()),
                            "ann@acme.io",
                        ),
                        fixtures::contact_at(2, "Bob", "Ray", acme),
                    ],
                ))
            });

        let form: ContactExportForm =
            serde_json::from_value(json!({"filters": {"has_email": true}})).unwrap();
        let export = export_contacts(&repo, &ZohoCrm, form, fixtures::timestamp()).unwrap();

        assert_eq!(export.total_contacts, 2);
        assert_eq!(export.filename, "leads_export_20250115_100000.csv");
        assert_eq!(export.export_timestamp, "2025-01-15T10:00:00Z");
        assert_eq!(export.csv_data.lines().count(), 3);
        assert!(export.csv_data.starts_with("First Name,Last Name,Email"));
    }

    #[test]
    fn list_export_requires_existing_list() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_list_by_id().returning(|_| Ok(None));
        repo.expect_list_lead_list_contacts().times(0);

        let form = ContactExportForm {
            list_id: Some(5),
            ..Default::default()
        };
        let result = export_contacts(&repo, &ZohoCrm, form, fixtures::timestamp());
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn list_export_names_file_after_list() {
        let mut repo = MockRepository::new();
        repo.expect_get_lead_list_by_id()
            .returning(|_| Ok(Some(fixtures::lead_list(2, "Tech CEOs"))));
        repo.expect_list_lead_list_contacts()
            .with(eq(LeadListId::new(2).unwrap()), eq(None::<Pagination>))
            .returning(|_, _| Ok((1, vec![fixtures::contact(3, "Sam", "Ito")])));

        let export = export_list(&repo, &ZohoCrm, 2, fixtures::timestamp()).unwrap();
        assert_eq!(export.filename, "Tech_CEOs_20250115_100000.csv");
        assert_eq!(export.list_name, "Tech CEOs");
        assert_eq!(export.total_contacts, 1);
    }

    #[test]
    fn company_export_counts_rows() {
        let mut repo = MockRepository::new();
        repo.expect_list_companies()
            .withf(|query| query.filter.industries == vec!["Technology".to_string()])
            .returning(|_| Ok((1, vec![fixtures::company(1, "TechFlow Solutions")])));

        let form: CompanyExportForm =
            serde_json::from_value(json!({"filters": {"industries": ["Technology"]}})).unwrap();
        let export = export_companies(&repo, &ZohoCrm, form, fixtures::timestamp()).unwrap();
        assert_eq!(export.total_companies, 1);
        assert_eq!(export.filename, "companies_export_20250115_100000.csv");
    }

    #[test]
    fn template_carries_sample_row() {
        let template = import_template(&ZohoCrm).unwrap();
        assert_eq!(template.filename, "zoho_crm_template.csv");
        assert_eq!(template.csv_data.lines().count(), 2);
    }
}
