//! HTTP facade around the pure engine.
//!
//! The engine itself performs no I/O; this layer deserializes requests,
//! enforces the catalog-size cap, injects the wall clock when the caller
//! omits `now`, and serializes structured results back out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::engine::{recommend_plans, LearnerProfile, PlannerOptions};
use crate::funding::{build_funding_plan, FundingProfile};

/// Bounds applied by the facade; the engine itself accepts any input.
#[derive(Debug, Clone)]
pub struct AdvisorState {
    pub max_catalog_records: usize,
}

/// Why the facade refused a recommendation request.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("catalog has {got} records, limit is {limit}")]
    CatalogTooLarge { got: usize, limit: usize },
}

pub fn advisor_router(state: AdvisorState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/v1/plans/recommend", post(recommend_handler))
        .route("/api/v1/funding/plan", post(funding_handler))
        .with_state(state)
}

async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecommendRequest {
    profile: LearnerProfile,
    catalog: Vec<Value>,
    options: RecommendOptions,
}

/// Recognized option keys; anything omitted takes the engine default, and
/// a missing `now` is resolved to the wall clock here at the boundary.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecommendOptions {
    default_module_minutes: Option<f64>,
    min_hours_per_week: Option<f64>,
    target_steps_preview: Option<usize>,
    distinct_pathways: Option<bool>,
    now: Option<DateTime<Utc>>,
}

impl RecommendOptions {
    fn into_planner_options(self) -> PlannerOptions {
        let mut options = PlannerOptions::new(self.now.unwrap_or_else(Utc::now));
        if let Some(minutes) = self.default_module_minutes {
            options.default_module_minutes = minutes;
        }
        if let Some(hours) = self.min_hours_per_week {
            options.min_hours_per_week = hours;
        }
        if let Some(steps) = self.target_steps_preview {
            options.target_steps_preview = steps;
        }
        if let Some(distinct) = self.distinct_pathways {
            options.distinct_pathways = distinct;
        }
        options
    }
}

async fn recommend_handler(
    State(state): State<AdvisorState>,
    Json(request): Json<RecommendRequest>,
) -> Response {
    if request.catalog.len() > state.max_catalog_records {
        let error = RecommendError::CatalogTooLarge {
            got: request.catalog.len(),
            limit: state.max_catalog_records,
        };
        warn!(%error, "rejected recommendation request");
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::PAYLOAD_TOO_LARGE, Json(payload)).into_response();
    }

    let options = request.options.into_planner_options();
    let plans = recommend_plans(&request.profile, &request.catalog, &options);
    (StatusCode::OK, Json(plans)).into_response()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FundingRequest {
    profile: FundingProfile,
}

async fn funding_handler(Json(request): Json<FundingRequest>) -> Response {
    let plan = build_funding_plan(&request.profile);
    (StatusCode::OK, Json(plan)).into_response()
}
