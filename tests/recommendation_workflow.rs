use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use pathway_advisor::engine::{DeviceKind, Strategy, TransportKind};
use pathway_advisor::{recommend_plans, LearnerProfile, PlannerOptions};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 15, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn catalog() -> Vec<Value> {
    vec![
        json!({
            "id": "cna-fast-track",
            "title": "CNA Fast Track",
            "cluster": "Healthcare",
            "estWeeks": 6,
            "estCost": 1400,
            "modules": [
                { "title": "Patient Care Basics", "minutes": 300 },
                { "title": "Clinical Lab", "minutes": 420 },
                { "title": "State Exam Prep", "minutes": 180 }
            ],
            "firstCredential": "STNA",
            "partners": ["Mercy College"],
            "jobsMeta": { "medianStart": 31000, "localEmployers": ["Mercy Health", "Summit Senior Living"] },
            "delivery": "hybrid"
        }),
        json!({
            "id": "it-helpdesk",
            "title": "IT Helpdesk Launchpad",
            "cluster": "IT & Cloud",
            "estWeeks": 10,
            "estCost": 900,
            "firstCredential": "CompTIA A+",
            "jobsMeta": { "openingsIndex": 72 },
            "deviceNeeds": "laptop",
            "delivery": "remote"
        }),
        json!({
            "id": "cdl-b-local",
            "title": "CDL-B Local Routes",
            "cluster": "Transportation & Logistics",
            "estWeeks": 4,
            "estCost": 2600,
            "jobsMeta": { "medianStart": 42000, "localEmployers": ["Metro Freight"] },
            "prerequisites": ["Driver's license"],
            "delivery": "in_person"
        }),
    ]
}

fn profile() -> LearnerProfile {
    let mut profile = LearnerProfile::default();
    profile.hours_per_week = Some(15.0);
    profile.device = DeviceKind::Laptop;
    profile.transport = TransportKind::Car;
    profile.prior_skills = vec!["Driver's license".to_string()];
    profile.state = Some("OH".to_string());
    profile
}

#[test]
fn catalog_of_three_produces_three_distinct_plans() {
    let plans = recommend_plans(&profile(), &catalog(), &PlannerOptions::new(fixed_now()));

    assert_eq!(plans.len(), 3);

    let strategies: Vec<Strategy> = plans.iter().map(|plan| plan.strategy).collect();
    assert_eq!(
        strategies,
        vec![
            Strategy::Fastest,
            Strategy::LeastCost,
            Strategy::HighestPlacement
        ]
    );

    let mut ids: Vec<&str> = plans.iter().map(|plan| plan.pathway_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3, "each strategy should pick a different pathway");

    let catalog_ids = ["cna-fast-track", "it-helpdesk", "cdl-b-local"];
    for plan in &plans {
        assert!(catalog_ids.contains(&plan.pathway_id.as_str()));
        assert!(plan.id.starts_with(&format!("plan_{}_", plan.strategy.label())));
        assert!(!plan.steps.is_empty());
    }
}

#[test]
fn empty_catalog_produces_no_plans() {
    let plans = recommend_plans(&profile(), &[], &PlannerOptions::new(fixed_now()));
    assert!(plans.is_empty());
}

#[test]
fn two_pathways_repeat_one_across_strategies() {
    let plans = recommend_plans(
        &profile(),
        &catalog()[..2],
        &PlannerOptions::new(fixed_now()),
    );

    assert_eq!(plans.len(), 3);

    let mut ids: Vec<&str> = plans.iter().map(|plan| plan.pathway_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 2);
}

#[test]
fn serialized_output_is_byte_identical_across_runs() {
    let options = PlannerOptions::new(fixed_now());

    let first = serde_json::to_string(&recommend_plans(&profile(), &catalog(), &options))
        .expect("serializable plans");
    let second = serde_json::to_string(&recommend_plans(&profile(), &catalog(), &options))
        .expect("serializable plans");

    assert_eq!(first, second);
}

#[test]
fn hostile_profile_keeps_figures_in_bounds() {
    let mut profile = LearnerProfile::default();
    profile.device = DeviceKind::Mobile;
    profile.transport = TransportKind::RemoteOnly;
    profile.unemployed = true;
    profile.veteran = true;
    profile.age = Some(19.0);
    profile.hs_grad = Some(false);
    profile.household_size = Some(6.0);

    let plans = recommend_plans(&profile, &catalog(), &PlannerOptions::new(fixed_now()));

    for plan in &plans {
        assert!(plan.net_cost_after_aid >= 0.0);
        assert!(plan.net_cost_after_aid <= plan.est_cost);
        assert!(plan.est_weeks >= 1);
        assert!(plan.next_cohort_date >= fixed_now());
    }
}

#[test]
fn malformed_catalog_entries_still_produce_plans() {
    let raw = vec![
        json!(null),
        json!({ "estCost": "not a number", "modules": 7 }),
        json!([1, 2, 3]),
    ];

    let plans = recommend_plans(&profile(), &raw, &PlannerOptions::new(fixed_now()));

    assert_eq!(plans.len(), 3);
    for plan in &plans {
        assert!(plan.pathway_id.starts_with("pw_"));
        assert_eq!(plan.net_cost_after_aid, 0.0);
    }
}
