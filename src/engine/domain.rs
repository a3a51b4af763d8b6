use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::numeric::normalize_token;

/// Canonical training pathway record produced by the catalog normalizer.
///
/// Every numeric field is finite and non-negative, and collection fields are
/// never "missing", only empty, regardless of how ragged the raw record was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pathway {
    pub id: String,
    pub title: String,
    pub cluster: String,
    pub est_weeks: Option<f64>,
    pub est_cost: f64,
    pub modules: Vec<PathwayModule>,
    pub first_credential: Option<String>,
    pub partners: Vec<String>,
    pub jobs_meta: JobsMeta,
    pub prerequisites: Vec<String>,
    pub device_needs: DeviceNeed,
    pub delivery: DeliveryMode,
    pub next_cohort_date: Option<DateTime<Utc>>,
}

/// One unit of coursework inside a pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayModule {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub minutes: Option<f64>,
}

/// Labor-market metadata attached to a pathway.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobsMeta {
    pub median_start: Option<f64>,
    pub openings_index: Option<f64>,
    pub local_employers: Vec<String>,
}

/// Hardware a pathway expects the learner to have access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceNeed {
    #[default]
    Any,
    Laptop,
    Desktop,
}

impl DeviceNeed {
    pub(crate) fn parse(token: &str) -> Self {
        match normalize_token(token).as_str() {
            "desktop" => Self::Desktop,
            "laptop" => Self::Laptop,
            _ => Self::Any,
        }
    }
}

/// How the pathway is delivered to learners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    #[default]
    Remote,
    Hybrid,
    InPerson,
}

impl DeliveryMode {
    pub(crate) fn parse(token: &str) -> Self {
        match normalize_token(token).as_str() {
            "remote" => Self::Remote,
            "hybrid" => Self::Hybrid,
            _ => Self::InPerson,
        }
    }
}

/// Device the learner actually has available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Desktop,
    Laptop,
    Tablet,
    Mobile,
    #[default]
    Unknown,
}

impl DeviceKind {
    fn parse(token: &str) -> Self {
        match normalize_token(token).as_str() {
            "desktop" => Self::Desktop,
            "laptop" => Self::Laptop,
            "tablet" => Self::Tablet,
            "mobile" => Self::Mobile,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for DeviceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// How the learner can reach in-person training, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    Car,
    Public,
    Bike,
    Walk,
    RemoteOnly,
    #[default]
    Unknown,
}

impl TransportKind {
    fn parse(token: &str) -> Self {
        match normalize_token(token).as_str() {
            "car" => Self::Car,
            "public" => Self::Public,
            "bike" => Self::Bike,
            "walk" => Self::Walk,
            "remote_only" => Self::RemoteOnly,
            _ => Self::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for TransportKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Self-reported learner constraints and eligibility flags.
///
/// Every field is optional on the wire; unrecognized device and transport
/// spellings collapse to `Unknown` rather than rejecting the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerProfile {
    pub hours_per_week: Option<f64>,
    pub device: DeviceKind,
    pub transport: TransportKind,
    pub prior_skills: Vec<String>,
    pub veteran: bool,
    pub unemployed: bool,
    pub hs_grad: Option<bool>,
    pub age: Option<f64>,
    pub state: Option<String>,
    pub household_size: Option<f64>,
}

/// The three competing objectives pathways are ranked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Fastest,
    LeastCost,
    HighestPlacement,
}

impl Strategy {
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Fastest => "fastest",
            Strategy::LeastCost => "least_cost",
            Strategy::HighestPlacement => "highest_placement",
        }
    }

    /// Fixed evaluation order; the plan selector depends on it.
    pub const fn ordered() -> [Strategy; 3] {
        [
            Strategy::Fastest,
            Strategy::LeastCost,
            Strategy::HighestPlacement,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Module,
    Exam,
    Apply,
}

/// One entry of a plan's short step preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub kind: StepKind,
    pub title: String,
}

/// A user-facing recommended plan, built fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub strategy: Strategy,
    pub pathway_id: String,
    pub title: String,
    pub est_weeks: u32,
    pub est_cost: f64,
    pub net_cost_after_aid: f64,
    pub next_cohort_date: DateTime<Utc>,
    pub steps: Vec<PlanStep>,
    /// Source pathway embedded for display (modules, credential, partners).
    pub pathway: Pathway,
}
