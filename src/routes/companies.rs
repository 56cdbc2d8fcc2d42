use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::company::{
    BulkCompaniesForm, CompanyForm, CompanyQuery, CompanySearchForm, UpdateCompanyForm,
};
use crate::repository::DieselRepository;
use crate::routes::created;
use crate::services::{ServiceError, companies as companies_service};

#[get("/api/companies")]
pub async fn list_companies(
    repo: web::Data<DieselRepository>,
    query: web::Query<CompanyQuery>,
) -> Result<HttpResponse, ServiceError> {
    let page = companies_service::list_companies(repo.get_ref(), query.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("/api/companies")]
pub async fn create_company(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CompanyForm>,
) -> Result<HttpResponse, ServiceError> {
    let company = companies_service::create_company(repo.get_ref(), form)?;
    Ok(created(&company))
}

#[post("/api/companies/search")]
pub async fn search_companies(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CompanySearchForm>,
) -> Result<HttpResponse, ServiceError> {
    let page = companies_service::search_companies(repo.get_ref(), form)?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("/api/companies/bulk")]
pub async fn bulk_create_companies(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BulkCompaniesForm>,
) -> Result<HttpResponse, ServiceError> {
    let response = companies_service::bulk_create_companies(repo.get_ref(), form)?;
    Ok(created(&response))
}

#[get("/api/companies/{company_id:\\d+}")]
pub async fn get_company(
    company_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let company = companies_service::get_company(repo.get_ref(), company_id.into_inner())?;
    Ok(HttpResponse::Ok().json(company))
}

#[put("/api/companies/{company_id:\\d+}")]
pub async fn update_company(
    company_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateCompanyForm>,
) -> Result<HttpResponse, ServiceError> {
    let company =
        companies_service::update_company(repo.get_ref(), company_id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(company))
}

#[delete("/api/companies/{company_id:\\d+}")]
pub async fn delete_company(
    company_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    companies_service::delete_company(repo.get_ref(), company_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
