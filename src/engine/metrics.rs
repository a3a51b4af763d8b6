//! Metrics deriver: feasibility-adjusted duration, cost, net cost after aid,
//! and a placement-likelihood score per pathway.

use super::aid::estimate_aid;
use super::domain::{LearnerProfile, Pathway};
use super::feasibility::feasibility_penalty;
use super::numeric::{clamp, finite_or};
use super::options::PlannerOptions;

/// Weekly hours are never assumed above this when estimating duration.
const MAX_HOURS_PER_WEEK: f64 = 80.0;

/// Coarse fallback when a pathway declares neither modules nor a duration.
const FALLBACK_WEEKS: f64 = 12.0;

/// Duration stretches by up to 30% of itself under a full penalty.
const DURATION_PENALTY_SHARE: f64 = 0.30;

/// Cost inflates by up to 15% under a full penalty.
const COST_PENALTY_SHARE: f64 = 0.15;

const PAY_THRESHOLD_LOW: f64 = 18_000.0;
const PAY_THRESHOLD_HIGH: f64 = 28_000.0;

/// Per-pathway figures derived for one ranking pass. Ephemeral: owned by the
/// pipeline for the duration of a single invocation and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub penalty: f64,
    pub est_weeks: f64,
    pub est_cost: f64,
    pub adj_weeks: u32,
    pub adj_cost: f64,
    pub net_cost_after_aid: f64,
    pub placement: f64,
}

pub fn derive_metrics(
    pathway: &Pathway,
    profile: &LearnerProfile,
    options: &PlannerOptions,
) -> DerivedMetrics {
    let hours = clamp(
        finite_or(profile.hours_per_week, options.min_hours_per_week),
        options.min_hours_per_week,
        MAX_HOURS_PER_WEEK,
    );
    let workable_hours = hours.max(1.0);

    let module_minutes = if !pathway.modules.is_empty() {
        pathway
            .modules
            .iter()
            .map(|module| finite_or(module.minutes, options.default_module_minutes))
            .sum()
    } else if let Some(weeks) = pathway.est_weeks.filter(|weeks| *weeks > 0.0) {
        weeks * 60.0 * workable_hours
    } else {
        FALLBACK_WEEKS * 60.0 * workable_hours
    };

    let weeks_by_modules = (module_minutes / 60.0 / workable_hours).ceil().max(1.0);
    let est_weeks = pathway.est_weeks.unwrap_or(weeks_by_modules);
    let est_cost = pathway.est_cost.max(0.0);

    let penalty = feasibility_penalty(pathway, profile);
    let adj_weeks = (est_weeks * (1.0 + penalty * DURATION_PENALTY_SHARE)).ceil() as u32;
    let adj_cost = (est_cost * (1.0 + penalty * COST_PENALTY_SHARE)).round();

    let aid = estimate_aid(pathway, profile, adj_cost);
    let net_cost_after_aid = (adj_cost - aid).max(0.0);

    let local_boost = if pathway.jobs_meta.local_employers.is_empty() {
        0.0
    } else {
        3.0
    };
    let partner_boost = if pathway.partners.is_empty() { 0.0 } else { 2.0 };
    let placement = clamp(
        placement_score(pathway) + local_boost + partner_boost,
        0.0,
        100.0,
    );

    DerivedMetrics {
        penalty,
        est_weeks,
        est_cost,
        adj_weeks,
        adj_cost,
        net_cost_after_aid,
        placement,
    }
}

/// Placement-likelihood base score in `[0, 100]`.
///
/// An explicit openings index wins outright; otherwise the score is inferred
/// from median starting pay and the presence of employers and partners.
fn placement_score(pathway: &Pathway) -> f64 {
    if let Some(index) = pathway.jobs_meta.openings_index {
        return clamp(index, 0.0, 100.0);
    }

    let mut score = 50.0;
    let median_start = finite_or(pathway.jobs_meta.median_start, 0.0);
    if median_start > PAY_THRESHOLD_LOW {
        score += 10.0;
    }
    if median_start > PAY_THRESHOLD_HIGH {
        score += 10.0;
    }
    if !pathway.jobs_meta.local_employers.is_empty() {
        score += 10.0;
    }
    if !pathway.partners.is_empty() {
        score += 8.0;
    }

    clamp(score, 0.0, 100.0)
}
