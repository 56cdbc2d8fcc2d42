use actix_web::{HttpResponse, get, post, web};

use crate::forms::contact::ContactForm;
use crate::forms::enrichment::{BulkEnrichForm, EmailValidationForm};
use crate::forms::lead::LeadQuery;
use crate::repository::DieselRepository;
use crate::routes::created;
use crate::services::{ServiceError, enrichment as enrichment_service, leads as leads_service};

#[get("/api/leads")]
pub async fn list_leads(
    repo: web::Data<DieselRepository>,
    query: web::Query<LeadQuery>,
) -> Result<HttpResponse, ServiceError> {
    let page = leads_service::list_leads(repo.get_ref(), query.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("/api/leads")]
pub async fn create_lead(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactForm>,
) -> Result<HttpResponse, ServiceError> {
    let lead = leads_service::create_lead(repo.get_ref(), form)?;
    Ok(created(&lead))
}

#[post("/api/leads/enrich/contact/{contact_id:\\d+}")]
pub async fn enrich_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let result = enrichment_service::enrich_contact(repo.get_ref(), contact_id.into_inner())?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/leads/enrich/company/{company_id:\\d+}")]
pub async fn enrich_company(
    company_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let result = enrichment_service::enrich_company(repo.get_ref(), company_id.into_inner())?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/leads/enrich/bulk")]
pub async fn bulk_enrich(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BulkEnrichForm>,
) -> Result<HttpResponse, ServiceError> {
    let result = enrichment_service::bulk_enrich(repo.get_ref(), form)?;
    Ok(HttpResponse::Ok().json(result))
}

#[post("/api/leads/validate/email")]
pub async fn validate_emails(
    web::Json(form): web::Json<EmailValidationForm>,
) -> Result<HttpResponse, ServiceError> {
    let result = enrichment_service::validate_emails(form)?;
    Ok(HttpResponse::Ok().json(result))
}
