//! Plan assembler: turns a (pathway, strategy) pick into a user-facing plan
//! with a short step preview and a next-cohort date.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

use super::domain::{Pathway, Plan, PlanStep, StepKind, Strategy};
use super::options::PlannerOptions;
use super::ranking::ScoredPathway;

/// A preview never shrinks below this many steps.
const MIN_PREVIEW_STEPS: usize = 3;

/// At most this many module steps lead the preview.
const PREVIEW_MODULE_COUNT: usize = 3;

pub fn build_plan(pick: &ScoredPathway, strategy: Strategy, options: &PlannerOptions) -> Plan {
    let pathway = &pick.pathway;

    Plan {
        id: format!("plan_{}_{}", strategy.label(), sanitize_id(&pathway.id)),
        strategy,
        pathway_id: pathway.id.clone(),
        title: pathway.title.clone(),
        est_weeks: pick.metrics.adj_weeks,
        est_cost: pick.metrics.adj_cost,
        net_cost_after_aid: pick.metrics.net_cost_after_aid,
        next_cohort_date: pathway
            .next_cohort_date
            .unwrap_or_else(|| next_cohort_date(options.now)),
        steps: build_steps_preview(pathway, options.target_steps_preview),
        pathway: pathway.clone(),
    }
}

/// Plan ids derive deterministically from strategy and pathway id; runs of
/// characters outside `[A-Za-z0-9_]` collapse to a single underscore.
fn sanitize_id(raw: &str) -> String {
    let mut sanitized = String::with_capacity(raw.len());
    let mut in_separator = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            sanitized.push(ch);
            in_separator = false;
        } else if !in_separator {
            sanitized.push('_');
            in_separator = true;
        }
    }

    sanitized
}

fn build_steps_preview(pathway: &Pathway, target_steps: usize) -> Vec<PlanStep> {
    let mut steps = Vec::new();

    for (index, module) in pathway.modules.iter().take(PREVIEW_MODULE_COUNT).enumerate() {
        let title = module
            .title
            .clone()
            .or_else(|| module.slug.clone())
            .unwrap_or_else(|| format!("Module {}", index + 1));
        steps.push(PlanStep {
            kind: StepKind::Module,
            title,
        });
    }

    if let Some(credential) = &pathway.first_credential {
        steps.push(PlanStep {
            kind: StepKind::Exam,
            title: format!("Sit for {credential}"),
        });
    }

    let employers = if pathway.jobs_meta.local_employers.is_empty() {
        &pathway.partners
    } else {
        &pathway.jobs_meta.local_employers
    };
    let apply_title = if employers.is_empty() {
        "Apply to 3 entry-level roles".to_string()
    } else {
        format!("Apply to {} local employers", employers.len().min(3))
    };
    steps.push(PlanStep {
        kind: StepKind::Apply,
        title: apply_title,
    });

    steps.truncate(target_steps.max(MIN_PREVIEW_STEPS));
    steps
}

/// Fallback cohort date: advance 10 days from the injected `now`, roll
/// forward to the next Monday, 09:00.
pub(crate) fn next_cohort_date(now: DateTime<Utc>) -> DateTime<Utc> {
    let shifted = now + Duration::days(10);
    let days_to_monday = (1 + 7 - shifted.weekday().num_days_from_sunday() as i64) % 7;
    let cohort_day = (shifted + Duration::days(days_to_monday)).date_naive();
    let nine_am = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);

    DateTime::from_naive_utc_and_offset(cohort_day.and_time(nine_am), Utc)
}
