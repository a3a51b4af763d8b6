//! Feasibility scorer: how poorly a pathway's delivery requirements match a
//! learner's circumstances, as a penalty in `[0, 0.85]`.

use std::collections::HashSet;

use super::domain::{DeliveryMode, DeviceKind, DeviceNeed, LearnerProfile, Pathway, TransportKind};
use super::numeric::{clamp, normalize_token};

/// Upper bound on the penalty so a maximally mismatched pathway stays
/// orderable instead of becoming categorically infeasible. Filtering is the
/// UI's call, not this scorer's.
pub const MAX_FEASIBILITY_PENALTY: f64 = 0.85;

const DESKTOP_GAP_PENALTY: f64 = 0.35;
const LAPTOP_GAP_PENALTY: f64 = 0.15;
const TRANSPORT_GAP_PENALTY: f64 = 0.25;
const PREREQ_GAP_PENALTY: f64 = 0.20;

pub fn feasibility_penalty(pathway: &Pathway, profile: &LearnerProfile) -> f64 {
    let mut penalty = 0.0;

    match (pathway.device_needs, profile.device) {
        (DeviceNeed::Desktop, DeviceKind::Mobile | DeviceKind::Tablet | DeviceKind::Unknown) => {
            penalty += DESKTOP_GAP_PENALTY;
        }
        (DeviceNeed::Laptop, DeviceKind::Mobile) => penalty += LAPTOP_GAP_PENALTY,
        _ => {}
    }

    if pathway.delivery != DeliveryMode::Remote
        && matches!(
            profile.transport,
            TransportKind::RemoteOnly | TransportKind::Unknown
        )
    {
        penalty += TRANSPORT_GAP_PENALTY;
    }

    if !pathway.prerequisites.is_empty() {
        let have: HashSet<String> = profile
            .prior_skills
            .iter()
            .map(|skill| normalize_token(skill))
            .collect();
        let met = pathway
            .prerequisites
            .iter()
            .filter(|required| have.contains(&normalize_token(required)))
            .count();
        let gap_share = 1.0 - met as f64 / pathway.prerequisites.len() as f64;
        penalty += PREREQ_GAP_PENALTY * gap_share;
    }

    clamp(penalty, 0.0, MAX_FEASIBILITY_PENALTY)
}
