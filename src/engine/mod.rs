//! Pathway recommendation pipeline.
//!
//! Pure and synchronous: normalize the raw catalog, derive per-pathway
//! metrics, rank under three competing strategies, select distinct picks,
//! and assemble user-facing plans. No I/O, no shared state, no hidden clock.

mod aid;
mod assembler;
pub mod domain;
mod feasibility;
mod metrics;
mod normalizer;
mod numeric;
mod options;
mod ranking;
mod selector;

#[cfg(test)]
mod tests;

use serde_json::Value;
use tracing::debug;

pub use aid::{estimate_aid, AID_COVERAGE_CAP};
pub use domain::{
    DeliveryMode, DeviceKind, DeviceNeed, JobsMeta, LearnerProfile, Pathway, PathwayModule, Plan,
    PlanStep, StepKind, Strategy, TransportKind,
};
pub use feasibility::{feasibility_penalty, MAX_FEASIBILITY_PENALTY};
pub use metrics::{derive_metrics, DerivedMetrics};
pub use normalizer::normalize_catalog;
pub use options::PlannerOptions;
pub use ranking::ScoredPathway;

/// Recommends up to three plans for a learner: one per strategy.
///
/// Returns no plans for an empty catalog, otherwise exactly three, with a
/// pathway repeated across strategies only when the catalog holds fewer than
/// three distinct pathways.
pub fn recommend_plans(
    profile: &LearnerProfile,
    catalog: &[Value],
    options: &PlannerOptions,
) -> Vec<Plan> {
    let pathways = normalize_catalog(catalog);
    if pathways.is_empty() {
        return Vec::new();
    }

    let scored: Vec<ScoredPathway> = pathways
        .into_iter()
        .map(|pathway| {
            let metrics = derive_metrics(&pathway, profile, options);
            ScoredPathway { pathway, metrics }
        })
        .collect();

    let ranked: Vec<(Strategy, Vec<&ScoredPathway>)> = Strategy::ordered()
        .into_iter()
        .map(|strategy| (strategy, ranking::rank(&scored, strategy)))
        .collect();

    let picks = selector::pick_per_strategy(&ranked, options.distinct_pathways);
    let plans: Vec<Plan> = picks
        .into_iter()
        .map(|(strategy, item)| assembler::build_plan(item, strategy, options))
        .collect();

    debug!(
        catalog_size = catalog.len(),
        plans = plans.len(),
        "generated pathway recommendations"
    );

    plans
}
