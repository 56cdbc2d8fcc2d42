use actix_web::{HttpResponse, delete, get, post, web};

use crate::forms::saved_search::SavedSearchForm;
use crate::repository::DieselRepository;
use crate::routes::created;
use crate::services::{ServiceError, saved_searches as saved_searches_service};

#[get("/api/searches")]
pub async fn list_saved_searches(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let searches = saved_searches_service::list_saved_searches(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(searches))
}

#[post("/api/searches")]
pub async fn create_saved_search(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<SavedSearchForm>,
) -> Result<HttpResponse, ServiceError> {
    let search = saved_searches_service::create_saved_search(repo.get_ref(), form)?;
    Ok(created(&search))
}

#[delete("/api/searches/{search_id:\\d+}")]
pub async fn delete_saved_search(
    search_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    saved_searches_service::delete_saved_search(repo.get_ref(), search_id.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
