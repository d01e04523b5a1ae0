//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the data set and page template named by the configuration
//! - Register every route and router middleware
//! - Hand back a router that is complete before any traffic arrives
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::AppConfig;
use crate::data::{load_cities, CityRepo, DataError};
use crate::routing::{middleware, Router};
use crate::web::{DashboardController, PageTemplate};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load settlement data from {path}: {source}")]
    Data {
        path: String,
        #[source]
        source: DataError,
    },

    #[error("failed to load page template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: tera::Error,
    },
}

/// Build the fully registered router for `config`.
pub fn build_router(config: &AppConfig) -> Result<Router, StartupError> {
    let cities_path = &config.data.cities_path;
    let cities = load_cities(Path::new(cities_path)).map_err(|source| StartupError::Data {
        path: cities_path.clone(),
        source,
    })?;

    let template_path = &config.server.template_path;
    let page = PageTemplate::load(Path::new(template_path)).map_err(|source| {
        StartupError::Template {
            path: template_path.clone(),
            source,
        }
    })?;

    let repo = Arc::new(CityRepo::new(cities));
    Ok(routes(config, repo, page))
}

/// Register middleware and dashboard routes over already loaded inputs.
pub fn routes(config: &AppConfig, repo: Arc<CityRepo>, page: PageTemplate) -> Router {
    let mut router = Router::new();

    router.use_middleware(middleware::request_logger());
    if config.security.enable_headers {
        router.use_middleware(middleware::security_headers());
    }

    let controller = Arc::new(DashboardController::new(
        repo,
        page,
        config.stats.longitude_buckets,
    ));
    controller.register(&mut router);

    tracing::debug!(?router, "Routes registered");
    router
}
