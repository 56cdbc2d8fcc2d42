use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::{ServiceError, api as api_service};

/// Location of an optional built frontend.
#[derive(Clone, Debug)]
pub struct StaticSite {
    pub dir: PathBuf,
}

impl StaticSite {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn index(&self) -> Option<PathBuf> {
        let index_path = self.dir.join("index.html");
        index_path.is_file().then_some(index_path)
    }

    /// A file below the site directory; traversal outside it is refused.
    fn file(&self, request_path: &str) -> Option<PathBuf> {
        let relative = Path::new(request_path.trim_start_matches('/'));
        if relative.as_os_str().is_empty()
            || !relative.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return None;
        }
        let path = self.dir.join(relative);
        path.is_file().then_some(path)
    }
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(api_service::health())
}

/// The frontend when one is deployed, otherwise a JSON banner.
#[get("/")]
pub async fn index(req: HttpRequest, site: web::Data<StaticSite>) -> HttpResponse {
    match site.index() {
        Some(index_path) => serve(&req, &index_path),
        None => HttpResponse::Ok().json(api_service::banner()),
    }
}

#[get("/api")]
pub async fn api_info() -> impl Responder {
    HttpResponse::Ok().json(api_service::api_info())
}

#[get("/api/stats")]
pub async fn stats(repo: web::Data<DieselRepository>) -> Result<HttpResponse, ServiceError> {
    let summary = api_service::database_stats(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Serves static files and falls back to `index.html` for client-side routes.
pub async fn frontend(req: HttpRequest, site: web::Data<StaticSite>) -> HttpResponse {
    if !req.path().starts_with("/api/") {
        if let Some(path) = site.file(req.path()).or_else(|| site.index()) {
            return serve(&req, &path);
        }
    }
    actix_web::ResponseError::error_response(&ServiceError::NotFound(
        "Resource not found".to_string(),
    ))
}

fn serve(req: &HttpRequest, path: &Path) -> HttpResponse {
    match NamedFile::open(path) {
        Ok(file) => file.into_response(req),
        Err(err) => {
            log::error!("Failed to open {}: {err}", path.display());
            actix_web::ResponseError::error_response(&ServiceError::Internal(
                "Failed to read static file".to_string(),
            ))
        }
    }
}
