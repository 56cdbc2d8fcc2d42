use actix_web::{HttpResponse, get, post, web};
use chrono::Utc;

use crate::crm::ZohoCrm;
use crate::forms::export::{CompanyExportForm, ContactExportForm};
use crate::repository::DieselRepository;
use crate::services::{ServiceError, export as export_service};

#[post("/api/export/contacts/csv")]
pub async fn export_contacts(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactExportForm>,
) -> Result<HttpResponse, ServiceError> {
    let export =
        export_service::export_contacts(repo.get_ref(), &ZohoCrm, form, Utc::now().naive_utc())?;
    Ok(HttpResponse::Ok().json(export))
}

#[get("/api/export/lists/{list_id:\\d+}/csv")]
pub async fn export_list(
    list_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let export = export_service::export_list(
        repo.get_ref(),
        &ZohoCrm,
        list_id.into_inner(),
        Utc::now().naive_utc(),
    )?;
    Ok(HttpResponse::Ok().json(export))
}

#[post("/api/export/companies/csv")]
pub async fn export_companies(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<CompanyExportForm>,
) -> Result<HttpResponse, ServiceError> {
    let export =
        export_service::export_companies(repo.get_ref(), &ZohoCrm, form, Utc::now().naive_utc())?;
    Ok(HttpResponse::Ok().json(export))
}

#[get("/api/export/zoho-template")]
pub async fn import_template() -> Result<HttpResponse, ServiceError> {
    let template = export_service::import_template(&ZohoCrm)?;
    Ok(HttpResponse::Ok().json(template))
}
