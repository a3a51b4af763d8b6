use chrono::{DateTime, Utc};

/// Tunables for one recommendation pass.
///
/// `now` anchors the next-cohort-date fallback and must be supplied by the
/// caller; the engine never reads a clock, so identical inputs always yield
/// identical output.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerOptions {
    /// Fallback duration for a module that omits its minutes.
    pub default_module_minutes: f64,
    /// Floor applied to the learner's weekly hours.
    pub min_hours_per_week: f64,
    /// Maximum step-preview length (clamped to at least 3 by the assembler).
    pub target_steps_preview: usize,
    /// Whether the selector prefers distinct pathways across strategies.
    pub distinct_pathways: bool,
    /// Injected reference time for the cohort-date fallback.
    pub now: DateTime<Utc>,
}

impl PlannerOptions {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            default_module_minutes: 45.0,
            min_hours_per_week: 4.0,
            target_steps_preview: 5,
            distinct_pathways: true,
            now,
        }
    }
}
