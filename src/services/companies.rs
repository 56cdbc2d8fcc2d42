//! Company CRUD and search.

use crate::domain::company::{Company, NewCompany};
use crate::domain::types::CompanyId;
use crate::dto::company::{BulkCompaniesResponse, CompanyPage};
use crate::forms::company::{
    BulkCompaniesForm, CompanyForm, CompanyQuery, CompanySearchForm, UpdateCompanyForm,
};
use crate::pagination::{PageMeta, page_window};
use crate::repository::errors::RepositoryError;
use crate::repository::{CompanyFilter, CompanyListQuery, CompanyReader, CompanyWriter};
use crate::services::{ServiceError, ServiceResult};

pub(crate) fn company_id(id: i32) -> ServiceResult<CompanyId> {
    CompanyId::new(id).map_err(|_| ServiceError::not_found("Company"))
}

fn company_page<R>(
    repo: &R,
    filter: CompanyFilter,
    page: Option<i64>,
    per_page: Option<i64>,
) -> ServiceResult<CompanyPage>
where
    R: CompanyReader + ?Sized,
{
    let window = page_window(page, per_page);
    let (total, companies) = repo
        .list_companies(CompanyListQuery::new(filter).paginate(window.page, window.per_page))
        .map_err(|err| {
            log::error!("Failed to list companies: {err}");
            err
        })?;

    Ok(CompanyPage {
        companies,
        meta: PageMeta::new(total, window),
        filters_applied: None,
    })
}

/// Filtered, paginated company listing.
pub fn list_companies<R>(repo: &R, query: CompanyQuery) -> ServiceResult<CompanyPage>
where
    R: CompanyReader + ?Sized,
{
    company_page(repo, CompanyFilter::from(&query), query.page, query.per_page)
}

/// Multi-value search; echoes the filters back.
pub fn search_companies<R>(repo: &R, form: CompanySearchForm) -> ServiceResult<CompanyPage>
where
    R: CompanyReader + ?Sized,
{
    let filter = CompanyFilter::from(form.filters.clone());
    let mut page = company_page(repo, filter, form.page, form.per_page)?;
    page.filters_applied = Some(form.filters);
    Ok(page)
}

pub fn get_company<R>(repo: &R, id: i32) -> ServiceResult<Company>
where
    R: CompanyReader + ?Sized,
{
    repo.get_company_by_id(company_id(id)?)?
        .ok_or_else(|| ServiceError::not_found("Company"))
}

pub fn create_company<R>(repo: &R, form: CompanyForm) -> ServiceResult<Company>
where
    R: CompanyWriter + ?Sized,
{
    let new_company = NewCompany::try_from(form)?;

    let mut created = repo
        .create_companies(std::slice::from_ref(&new_company))
        .map_err(|err| {
            log::error!("Failed to create company: {err}");
            err
        })?;

    created
        .pop()
        .ok_or_else(|| ServiceError::Internal("Company was not created".to_string()))
}

/// Applies a partial update to an existing company.
pub fn update_company<R>(repo: &R, id: i32, form: UpdateCompanyForm) -> ServiceResult<Company>
where
    R: CompanyReader + CompanyWriter + ?Sized,
{
    let current = get_company(repo, id)?;
    let updates = form.apply(NewCompany::from(current.clone()))?;

    repo.update_company(current.id, &updates).map_err(|err| {
        log::error!("Failed to update company {id}: {err}");
        ServiceError::from(err)
    })
}

/// Deletes the company together with its contacts.
pub fn delete_company<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CompanyWriter + ?Sized,
{
    repo.delete_company(company_id(id)?).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::not_found("Company"),
        err => {
            log::error!("Failed to delete company {id}: {err}");
            ServiceError::from(err)
        }
    })
}

/// Creates all companies or none.
pub fn bulk_create_companies<R>(
    repo: &R,
    form: BulkCompaniesForm,
) -> ServiceResult<BulkCompaniesResponse>
where
    R: CompanyWriter + ?Sized,
{
    let new_companies = Vec::<NewCompany>::try_from(form)?;

    let companies = repo.create_companies(&new_companies).map_err(|err| {
        log::error!("Failed to bulk create companies: {err}");
        err
    })?;

    Ok(BulkCompaniesResponse {
        message: format!("Successfully created {} companies", companies.len()),
        companies,
    })
}
