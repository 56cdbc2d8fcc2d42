use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::forms::contact::{
    BulkContactsForm, ContactForm, ContactQuery, ContactSearchForm, UpdateContactForm,
};
use crate::repository::DieselRepository;
use crate::routes::created;
use crate::services::{ServiceError, contacts as contacts_service};

#[get("/api/contacts")]
pub async fn list_contacts(
    repo: web::Data<DieselRepository>,
    query: web::Query<ContactQuery>,
) -> Result<HttpResponse, ServiceError> {
    let page = contacts_service::list_contacts(repo.get_ref(), query.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("/api/contacts")]
pub async fn create_contact(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactForm>,
) -> Result<HttpResponse, ServiceError> {
    let contact = contacts_service::create_contact(repo.get_ref(), form)?;
    Ok(created(&contact))
}

#[post("/api/contacts/search")]
pub async fn search_contacts(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ContactSearchForm>,
) -> Result<HttpResponse, ServiceError> {
    let page = contacts_service::search_contacts(repo.get_ref(), form)?;
    Ok(HttpResponse::Ok().json(page))
}

#[post("/api/contacts/bulk")]
pub async fn bulk_create_contacts(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<BulkContactsForm>,
) -> Result<HttpResponse, ServiceError> {
    let response = contacts_service::bulk_create_contacts(repo.get_ref(), form)?;
    Ok(created(&response))
}

#[get("/api/contacts/stats")]
pub async fn contact_stats(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let stats = contacts_service::contact_stats(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/api/contacts/{contact_id:\\d+}")]
pub async fn get_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let contact = contacts_service::get_contact(repo.get_ref(), contact_id.into_inner())?;
    Ok(HttpResponse::Ok().json(contact))
}

#[put("/api/contacts/{contact_id:\\d+}")]
pub async fn update_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<UpdateContactForm>,
) -> Result<HttpResponse, ServiceError> {
    let contact =
        contacts_service::update_contact(repo.get_ref(), contact_id.into_inner(), form)?;
    Ok(HttpResponse::Ok().json(contact))
}

#[delete("/api/contacts/{contact_id:\\d+}")]
pub async fn delete_contact(
    contact_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    contacts_service::delete_contact(repo.get_ref(), contact_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
