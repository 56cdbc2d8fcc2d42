//! HTTP handlers. Each handler parses the request, calls one service and
//! serializes the result; errors render through [`ServiceError`].

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::services::ServiceError;

pub mod api;
pub mod companies;
pub mod contacts;
pub mod export;
pub mod lead_lists;
pub mod leads;
pub mod saved_searches;

/// Registers every API route. Static routes go before `{id}` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api::health)
        .service(api::index)
        .service(api::api_info)
        .service(api::stats)
        .service(companies::list_companies)
        .service(companies::create_company)
        .service(companies::search_companies)
        .service(companies::bulk_create_companies)
        .service(companies::get_company)
        .service(companies::update_company)
        .service(companies::delete_company)
        .service(contacts::list_contacts)
        .service(contacts::create_contact)
        .service(contacts::search_contacts)
        .service(contacts::bulk_create_contacts)
        .service(contacts::contact_stats)
        .service(contacts::get_contact)
        .service(contacts::update_contact)
        .service(contacts::delete_contact)
        .service(leads::list_leads)
        .service(leads::create_lead)
        .service(leads::enrich_contact)
        .service(leads::enrich_company)
        .service(leads::bulk_enrich)
        .service(leads::validate_emails)
        .service(lead_lists::list_lead_lists)
        .service(lead_lists::create_lead_list)
        .service(lead_lists::lead_list_stats)
        .service(lead_lists::get_lead_list)
        .service(lead_lists::update_lead_list)
        .service(lead_lists::delete_lead_list)
        .service(lead_lists::add_contacts)
        .service(lead_lists::remove_contacts)
        .service(lead_lists::remove_contact)
        .service(saved_searches::list_saved_searches)
        .service(saved_searches::create_saved_search)
        .service(saved_searches::delete_saved_search)
        .service(export::export_contacts)
        .service(export::export_list)
        .service(export::export_companies)
        .service(export::import_template);
}

/// Renders malformed JSON bodies as `400` with the usual error payload.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        log::warn!("Rejected request body: {err}");
        ServiceError::BadRequest(format!("Invalid JSON payload: {err}")).into()
    })
}

/// Renders unparsable query strings as `400`.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        ServiceError::BadRequest(format!("Invalid query string: {err}")).into()
    })
}

/// Renders ids that do not parse as `404`, like any other unknown resource.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req: &HttpRequest| {
        log::debug!("Unmatched path {}: {err}", req.path());
        ServiceError::NotFound("Resource not found".to_string()).into()
    })
}

pub(crate) fn created<T: serde::Serialize>(body: &T) -> HttpResponse {
    HttpResponse::Created().json(body)
}
