use chrono::{TimeZone, Utc};

use super::common::*;
use crate::engine::assembler::{build_plan, next_cohort_date};
use crate::engine::domain::{StepKind, Strategy};

#[test]
fn plan_ids_are_sanitized_and_prefixed_by_strategy() {
    let pick = scored("cna fast-track!", 6, 1200.0, 70.0);
    let plan = build_plan(&pick, Strategy::Fastest, &options());

    assert_eq!(plan.id, "plan_fastest_cna_fast_track_");
    assert_eq!(plan.pathway_id, "cna fast-track!");
    assert_eq!(plan.strategy, Strategy::Fastest);
    assert_eq!(plan.est_weeks, 6);
    assert_close(plan.est_cost, 1200.0);
    assert_close(plan.net_cost_after_aid, 1200.0);
}

#[test]
fn preview_leads_with_modules_then_exam_then_apply() {
    let mut pick = scored("loaded", 8, 900.0, 60.0);
    pick.pathway.modules = vec![
        module("Intro", Some(60.0)),
        module("Lab", Some(120.0)),
        module("Capstone", Some(90.0)),
        module("Extra", Some(30.0)),
    ];
    pick.pathway.first_credential = Some("STNA".to_string());
    pick.pathway.jobs_meta.local_employers =
        vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()];

    let plan = build_plan(&pick, Strategy::LeastCost, &options());

    let titles: Vec<&str> = plan.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Intro",
            "Lab",
            "Capstone",
            "Sit for STNA",
            "Apply to 3 local employers",
        ]
    );
    assert_eq!(plan.steps[0].kind, StepKind::Module);
    assert_eq!(plan.steps[3].kind, StepKind::Exam);
    assert_eq!(plan.steps[4].kind, StepKind::Apply);
}

#[test]
fn apply_step_falls_back_to_generic_roles() {
    let pick = scored("bare", 12, 0.0, 50.0);
    let plan = build_plan(&pick, Strategy::HighestPlacement, &options());

    assert_eq!(plan.steps.len(), 1);
    assert_eq!(plan.steps[0].kind, StepKind::Apply);
    assert_eq!(plan.steps[0].title, "Apply to 3 entry-level roles");
}

#[test]
fn preview_truncation_never_drops_below_three_steps() {
    let mut pick = scored("long", 10, 500.0, 55.0);
    pick.pathway.modules = vec![
        module("One", None),
        module("Two", None),
        module("Three", None),
    ];
    pick.pathway.first_credential = Some("Cert".to_string());

    let mut opts = options();
    opts.target_steps_preview = 1;
    let plan = build_plan(&pick, Strategy::Fastest, &opts);

    let titles: Vec<&str> = plan.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}

#[test]
fn explicit_cohort_date_is_preserved() {
    let explicit = Utc
        .with_ymd_and_hms(2026, 4, 6, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    let mut pick = scored("dated", 4, 100.0, 50.0);
    pick.pathway.next_cohort_date = Some(explicit);

    let plan = build_plan(&pick, Strategy::Fastest, &options());
    assert_eq!(plan.next_cohort_date, explicit);
}

#[test]
fn fallback_cohort_lands_on_the_next_monday_morning() {
    let expected = Utc
        .with_ymd_and_hms(2026, 3, 16, 9, 0, 0)
        .single()
        .expect("valid timestamp");

    // Ten days past Wednesday 2026-03-04 is Saturday the 14th; the following
    // Monday is the 16th.
    assert_eq!(next_cohort_date(fixed_now()), expected);

    // A shifted date already on Monday keeps that Monday.
    let monday_now = Utc
        .with_ymd_and_hms(2026, 2, 20, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    let kept = Utc
        .with_ymd_and_hms(2026, 3, 2, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    assert_eq!(next_cohort_date(monday_now), kept);
}
