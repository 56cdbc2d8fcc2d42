use std::collections::BTreeMap;

use crate::dto::api::{ApiInfo, Banner, HealthResponse, SERVICE_NAME, StatsResponse};
use crate::repository::StatsReader;
use crate::services::ServiceResult;

pub fn health() -> HealthResponse {
    HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    }
}

/// Service name, version and the top-level endpoint map.
pub fn api_info() -> ApiInfo {
    let endpoints = BTreeMap::from([
        ("stats", "/api/stats"),
        ("companies", "/api/companies"),
        ("contacts", "/api/contacts"),
        ("lead_lists", "/api/lists"),
        ("saved_searches", "/api/searches"),
        ("lead_generation", "/api/leads"),
        ("export", "/api/export"),
        ("health", "/health"),
    ]);

    ApiInfo {
        service: "LeadDB API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    }
}

pub fn banner() -> Banner {
    Banner {
        message: "LeadDB Backend API",
        status: "running",
        frontend: "not_deployed",
        api_docs: "/api",
    }
}

/// Row counts of companies, contacts and lead lists.
pub fn database_stats<R>(repo: &R) -> ServiceResult<StatsResponse>
where
    R: StatsReader + ?Sized,
{
    let stats = repo.database_stats().map_err(|err| {
        log::error!("Failed to retrieve stats: {err}");
        err
    })?;

    Ok(StatsResponse {
        status: "success",
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::DatabaseStats;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    #[test]
    fn health_reports_service_name() {
        let health = health();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "leaddb-backend");
    }

    #[test]
    fn api_info_lists_endpoints() {
        let info = api_info();
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.endpoints["lead_lists"], "/api/lists");
        assert_eq!(info.endpoints["health"], "/health");
    }

    #[test]
    fn stats_wraps_counts() {
        let mut repo = MockRepository::new();
        repo.expect_database_stats().returning(|| {
            Ok(DatabaseStats {
                companies: 5,
                contacts: 10,
                campaigns: 3,
            })
        });

        let response = database_stats(&repo).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.stats.campaigns, 3);
    }

    #[test]
    fn stats_failure_is_internal() {
        let mut repo = MockRepository::new();
        repo.expect_database_stats()
            .returning(|| Err(RepositoryError::ConnectionError("down".into())));

        assert!(matches!(
            database_stats(&repo),
            Err(ServiceError::Internal(_))
        ));
    }
}
