//! Request handlers for the dashboard page and JSON API.

use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;

use crate::data::CityRepo;
use crate::routing::{Params, Request, ResponseWriter, Router};
use crate::stats::{
    Aggregation, DistrictAggregation, LongitudeAggregation, SettlementTypeAggregation,
};
use crate::web::page::{PageData, PageTemplate};

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
    cities: usize,
}

/// Shared state behind every dashboard handler.
#[derive(Debug)]
pub struct DashboardController {
    repo: Arc<CityRepo>,
    page: PageTemplate,
    longitude: LongitudeAggregation,
}

impl DashboardController {
    pub fn new(repo: Arc<CityRepo>, page: PageTemplate, longitude_buckets: usize) -> Self {
        Self {
            repo,
            page,
            longitude: LongitudeAggregation::new(longitude_buckets),
        }
    }

    /// Registers the dashboard routes on `router`.
    pub fn register(self: Arc<Self>, router: &mut Router) {
        let c = Arc::clone(&self);
        router.get("/", move |w, req, p| c.main_page(w, req, p));

        let c = Arc::clone(&self);
        router.get("/api/health", move |w, req, p| c.health(w, req, p));

        let c = Arc::clone(&self);
        router.get("/api/stats/settlement-types", move |w, _, _| {
            c.aggregate(w, &SettlementTypeAggregation)
        });

        let c = Arc::clone(&self);
        router.get("/api/stats/districts", move |w, _, _| {
            c.aggregate(w, &DistrictAggregation)
        });

        let c = Arc::clone(&self);
        router.get("/api/stats/longitude", move |w, _, _| {
            let strategy = c.longitude;
            c.aggregate(w, &strategy)
        });

        let c = self;
        router.get("/api/cities/:id", move |w, req, p| c.city(w, req, p));
    }

    fn page_data(&self) -> PageData {
        let cities = self.repo.all();
        PageData {
            table: SettlementTypeAggregation.aggregate(cities),
            longitude_chart: self.longitude.aggregate(cities),
            district_chart: DistrictAggregation.aggregate(cities),
        }
    }

    fn main_page(&self, w: &mut ResponseWriter, _req: &Request, _params: &Params) {
        match self.page.render(&self.page_data()) {
            Ok(html) => w.html(StatusCode::OK, &html),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to render main page");
                w.text(StatusCode::INTERNAL_SERVER_ERROR, "500 internal server error");
            }
        }
    }

    fn health(&self, w: &mut ResponseWriter, _req: &Request, _params: &Params) {
        w.json(
            StatusCode::OK,
            &HealthStatus {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                cities: self.repo.len(),
            },
        );
    }

    fn aggregate<A: Aggregation>(&self, w: &mut ResponseWriter, strategy: &A) {
        tracing::debug!(strategy = strategy.name(), "Running aggregation");
        w.json(StatusCode::OK, &strategy.aggregate(self.repo.all()));
    }

    fn city(&self, w: &mut ResponseWriter, _req: &Request, params: &Params) {
        let id = match params.get("id").map(str::parse::<u32>) {
            Some(Ok(id)) => id,
            _ => {
                w.json(StatusCode::BAD_REQUEST, &ErrorBody { error: "invalid city id" });
                return;
            }
        };

        match self.repo.get(id) {
            Some(city) => w.json(StatusCode::OK, city),
            None => w.json(StatusCode::NOT_FOUND, &ErrorBody { error: "city not found" }),
        }
    }
}
