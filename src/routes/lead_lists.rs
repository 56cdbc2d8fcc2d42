use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::lead_list::{ContactIdsForm, LeadListForm, PageQuery, UpdateLeadListForm};
use crate::repository::DieselRepository;
use crate::routes::created;
use crate::services::{ServiceError, lead_lists as lead_lists_service};

#[get("/api/lists")]
pub async fn list_lead_lists(
    repo: web::Data<DieselRepository>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ServiceError> {
    let page = lead_lists_service::list_lead_lists(repo.get_ref(), query.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("/api/lists")]
pub async fn create_lead_list(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LeadListForm>,
) -> Result<HttpResponse, ServiceError> {
    let list = lead_lists_service::create_lead_list(repo.get_ref(), form)?;
    Ok(created(&list))
}

#[get("/api/lists/stats")]
pub async fn lead_list_stats(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let stats = lead_lists_service::lead_list_stats(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/api/lists/{list_id:\\d+}")]
pub async fn get_lead_list(
    list_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ServiceError> {
    let detail =
        lead_lists_service::get_lead_list(repo.get_ref(), list_id.into_inner(), query.into_inner())?;
    Ok(HttpResponse::Ok().json(detail))
}

#[put("/api/lists/{list_id:\\d+}")]
pub async fn update_lead_list(
    list_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateLeadListForm>,
) -> Result<HttpResponse, ServiceError> {
    let list = lead_lists_service::update_lead_list(repo.get_ref(), list_id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(list))
}

#[delete("/api/lists/{list_id:\\d+}")]
pub async fn delete_lead_list(
    list_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    lead_lists_service::delete_lead_list(repo.get_ref(), list_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

#[post("/api/lists/{list_id:\\d+}/contacts")]
pub async fn add_contacts(
    list_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactIdsForm>,
) -> Result<HttpResponse, ServiceError> {
    let response = lead_lists_service::add_contacts(repo.get_ref(), list_id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/lists/{list_id:\\d+}/contacts/bulk")]
pub async fn remove_contacts(
    list_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactIdsForm>,
) -> Result<HttpResponse, ServiceError> {
    let response =
        lead_lists_service::remove_contacts(repo.get_ref(), list_id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/lists/{list_id:\\d+}/contacts/{contact_id:\\d+}")]
pub async fn remove_contact(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let (list_id, contact_id) = path.into_inner();
    let response = lead_lists_service::remove_contact(repo.get_ref(), list_id, contact_id)?;
    Ok(HttpResponse::Ok().json(response))
}
