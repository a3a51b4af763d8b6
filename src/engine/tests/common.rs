use chrono::{DateTime, TimeZone, Utc};

use crate::engine::domain::{
    DeliveryMode, DeviceNeed, JobsMeta, LearnerProfile, Pathway, PathwayModule,
};
use crate::engine::metrics::DerivedMetrics;
use crate::engine::options::PlannerOptions;
use crate::engine::ranking::ScoredPathway;

/// Wednesday, 2026-03-04 15:30 UTC.
pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 15, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn options() -> PlannerOptions {
    PlannerOptions::new(fixed_now())
}

pub(super) fn profile() -> LearnerProfile {
    LearnerProfile::default()
}

/// Minimal remote pathway with no prerequisites or metadata.
pub(super) fn pathway(id: &str) -> Pathway {
    Pathway {
        id: id.to_string(),
        title: id.to_string(),
        cluster: String::new(),
        est_weeks: None,
        est_cost: 0.0,
        modules: Vec::new(),
        first_credential: None,
        partners: Vec::new(),
        jobs_meta: JobsMeta::default(),
        prerequisites: Vec::new(),
        device_needs: DeviceNeed::Any,
        delivery: DeliveryMode::Remote,
        next_cohort_date: None,
    }
}

pub(super) fn module(title: &str, minutes: Option<f64>) -> PathwayModule {
    PathwayModule {
        title: Some(title.to_string()),
        slug: None,
        minutes,
    }
}

/// Scored pathway with hand-picked metrics for ranking and selection tests.
pub(super) fn scored(id: &str, adj_weeks: u32, net_cost: f64, placement: f64) -> ScoredPathway {
    ScoredPathway {
        pathway: pathway(id),
        metrics: DerivedMetrics {
            penalty: 0.0,
            est_weeks: adj_weeks as f64,
            est_cost: net_cost,
            adj_weeks,
            adj_cost: net_cost,
            net_cost_after_aid: net_cost,
            placement,
        },
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
