//! Strategy ranker: three independent comparator chains over derived metrics.
//!
//! Sorts are stable and every tie is broken in the documented order, so two
//! identical invocations always produce identical orderings.

use std::cmp::Ordering;

use super::domain::{Pathway, Strategy};
use super::metrics::DerivedMetrics;

/// A normalized pathway paired with the metrics derived for this invocation.
#[derive(Debug, Clone)]
pub struct ScoredPathway {
    pub pathway: Pathway,
    pub metrics: DerivedMetrics,
}

pub fn rank(scored: &[ScoredPathway], strategy: Strategy) -> Vec<&ScoredPathway> {
    let mut ranked: Vec<&ScoredPathway> = scored.iter().collect();
    ranked.sort_by(|a, b| compare(strategy, &a.metrics, &b.metrics));
    ranked
}

/// Comparator chain for one strategy. Metric floats are guaranteed finite by
/// the normalizer and deriver, so `total_cmp` imposes the expected order.
fn compare(strategy: Strategy, a: &DerivedMetrics, b: &DerivedMetrics) -> Ordering {
    match strategy {
        Strategy::Fastest => a
            .adj_weeks
            .cmp(&b.adj_weeks)
            .then_with(|| a.net_cost_after_aid.total_cmp(&b.net_cost_after_aid))
            .then_with(|| b.placement.total_cmp(&a.placement)),
        Strategy::LeastCost => a
            .net_cost_after_aid
            .total_cmp(&b.net_cost_after_aid)
            .then_with(|| a.adj_weeks.cmp(&b.adj_weeks))
            .then_with(|| b.placement.total_cmp(&a.placement)),
        Strategy::HighestPlacement => b
            .placement
            .total_cmp(&a.placement)
            .then_with(|| a.adj_weeks.cmp(&b.adj_weeks))
            .then_with(|| a.net_cost_after_aid.total_cmp(&b.net_cost_after_aid)),
    }
}
