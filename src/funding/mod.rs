//! Funding eligibility advisor.
//!
//! Maps profile flags and a jurisdiction code to an ordered checklist of
//! funding-program steps with a coarse coverage estimate. Independent of the
//! pathway catalog and of the aid estimator used for ranking: this output is
//! a learner-facing checklist, not a cost adjustment.

pub mod domain;
mod resources;
mod rules;


use tracing::debug;

pub use domain::{CoverageTier, FundingContact, FundingPlan, FundingProfile, FundingStep};

/// Builds an advisory funding checklist for a learner.
///
/// Always returns at least one step (the employer-tuition suggestion) and a
/// coverage tier. Unrecognized jurisdictions skip the state-grant rule and
/// fall back to a generic workforce-center locator; neither is an error.
pub fn build_funding_plan(profile: &FundingProfile) -> FundingPlan {
    let plan = rules::evaluate(profile);

    debug!(
        coverage = plan.coverage.label(),
        steps = plan.steps.len(),
        "built funding plan"
    );

    plan
}
