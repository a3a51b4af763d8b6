use serde::{Deserialize, Serialize};

use crate::engine::LearnerProfile;

/// Subset of the learner profile relevant to funding eligibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundingProfile {
    /// Two-letter jurisdiction code; unrecognized codes are not an error.
    pub state: Option<String>,
    pub unemployed: bool,
    pub veteran: bool,
    pub hs_grad: Option<bool>,
    pub age: Option<f64>,
    pub household_size: Option<f64>,
}

impl From<&LearnerProfile> for FundingProfile {
    fn from(profile: &LearnerProfile) -> Self {
        Self {
            state: profile.state.clone(),
            unemployed: profile.unemployed,
            veteran: profile.veteran,
            hs_grad: profile.hs_grad,
            age: profile.age,
            household_size: profile.household_size,
        }
    }
}

/// Coarse headline indicator of how much of the cost is likely covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    Full,
    Partial,
    None,
}

impl CoverageTier {
    pub const fn label(self) -> &'static str {
        match self {
            CoverageTier::Full => "full",
            CoverageTier::Partial => "partial",
            CoverageTier::None => "none",
        }
    }
}

/// One actionable item on the funding checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingStep {
    pub program: String,
    pub action: String,
    pub documents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Pointer to a program's office or website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingContact {
    pub program: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Advisory funding checklist; newly constructed on every call, never
/// persisted by the engine. Not a compliance determination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingPlan {
    pub coverage: CoverageTier,
    pub steps: Vec<FundingStep>,
    pub contacts: Vec<FundingContact>,
    pub notes: Vec<String>,
}
