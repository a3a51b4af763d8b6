//! Decision-support core for career-pathway planning: feasibility-adjusted
//! metrics, three-way strategy ranking, distinct plan selection, and an
//! independent funding-eligibility advisor, plus a thin HTTP facade.

pub mod config;
pub mod engine;
pub mod error;
pub mod funding;
pub mod router;
pub mod telemetry;

pub use engine::{recommend_plans, LearnerProfile, Plan, PlannerOptions};
pub use funding::{build_funding_plan, FundingPlan, FundingProfile};
