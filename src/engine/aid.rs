//! Heuristic financial-aid estimator.
//!
//! Advisory only: the funding module produces the learner-facing checklist,
//! while this estimate feeds the net-cost figure used for ranking. All
//! bonuses are summed before the cap is applied, so rule order is irrelevant.

use super::domain::{LearnerProfile, Pathway};
use super::numeric::{clamp, finite_or};

/// Aid never covers more than this share of the adjusted cost.
pub const AID_COVERAGE_CAP: f64 = 0.9;

/// Absolute ceiling on the veteran education benefit contribution.
const VETERAN_AID_CEILING: f64 = 4_000.0;

const YOUTH_AGE_CUTOFF: f64 = 24.0;
const ASSUMED_AGE: f64 = 30.0;

/// Cluster keyword table; matched case-insensitively as substrings of the
/// pathway's cluster label. Kept as data so the nudges can be audited or
/// swapped without touching the scoring logic.
const CLUSTER_BONUSES: &[(&[&str], f64)] = &[
    (&["health", "nurse", "care"], 0.10),
    (&["manufactur", "trades", "logist"], 0.08),
    (&["cyber", "it", "cloud", "data"], 0.06),
];

pub fn estimate_aid(pathway: &Pathway, profile: &LearnerProfile, base_cost: f64) -> f64 {
    if !base_cost.is_finite() || base_cost <= 0.0 {
        return 0.0;
    }

    let mut aid = 0.0;

    if profile.unemployed {
        aid += base_cost * 0.35;
    }
    if profile.veteran {
        aid += (base_cost * 0.40).min(VETERAN_AID_CEILING);
    }
    if finite_or(profile.age, ASSUMED_AGE) <= YOUTH_AGE_CUTOFF {
        aid += base_cost * 0.15;
    }
    if profile.hs_grad == Some(false) {
        aid += base_cost * 0.10;
    }

    let cluster = pathway.cluster.to_ascii_lowercase();
    for (keywords, share) in CLUSTER_BONUSES {
        if keywords.iter().any(|keyword| cluster.contains(keyword)) {
            aid += base_cost * share;
        }
    }

    if finite_or(profile.household_size, 0.0) >= 4.0 {
        aid += base_cost * 0.05;
    }

    clamp(aid, 0.0, base_cost * AID_COVERAGE_CAP)
}
