//! Funding rule engine: independently gated rules, all appended when
//! triggered, plus the coverage-tier point model.

use super::domain::{CoverageTier, FundingContact, FundingPlan, FundingProfile, FundingStep};
use super::resources;

/// WIOA Youth eligibility window, inclusive.
const YOUTH_MIN_AGE: f64 = 16.0;
const YOUTH_MAX_AGE: f64 = 24.0;

pub(crate) fn evaluate(profile: &FundingProfile) -> FundingPlan {
    let mut steps = Vec::new();
    let mut contacts = Vec::new();
    let mut notes = Vec::new();

    let youth = matches!(profile.age, Some(age) if age.is_finite() && (YOUTH_MIN_AGE..=YOUTH_MAX_AGE).contains(&age));
    let household_size = profile.household_size.filter(|n| n.is_finite()).unwrap_or(0.0);
    let snap_eligible = profile.unemployed || household_size >= 2.0;

    if profile.unemployed || youth {
        let resource = resources::one_stop_resource(profile.state.as_deref());
        steps.push(step(
            "WIOA / Eligible Training (ETPL)",
            "Contact your local workforce board and ask about Individual Training Accounts (ITAs) for approved programs.",
            &[
                "Government ID",
                "Resume",
                "Proof of address",
                "Selective Service (if required)",
            ],
            Some(resource.label),
        ));
        contacts.push(FundingContact {
            program: "WIOA / ETPL".to_string(),
            url_hint: Some(resource.url.to_string()),
            phone: resource.phone.map(str::to_string),
        });

        if youth {
            notes.push(
                "You may also qualify for WIOA Youth (16-24). Ask for youth services and supportive services (transport, exam fees)."
                    .to_string(),
            );
        }
    }

    if profile.veteran {
        steps.push(step(
            "VA Education (GI Bill® / VR&E)",
            "Check your benefits eligibility and request a Certificate of Eligibility (COE).",
            &["DD-214", "COE (if available)"],
            Some("VA Education Benefits"),
        ));
        contacts.push(FundingContact {
            program: "VA Education".to_string(),
            url_hint: Some("https://www.va.gov/education/".to_string()),
            phone: Some("888-442-4551".to_string()),
        });
    }

    let state_grant = resources::short_term_grant(profile.state.as_deref());
    if let Some(grant) = state_grant {
        steps.push(step(
            grant.name,
            grant.action,
            &["ID", "Proof of residency", "Program quote (cost & weeks)"],
            Some(grant.label),
        ));
        contacts.push(FundingContact {
            program: grant.name.to_string(),
            url_hint: Some(grant.url.to_string()),
            phone: None,
        });
    }

    if snap_eligible {
        steps.push(step(
            "SNAP Employment & Training",
            "Ask your county Job & Family Services about SNAP E&T eligible training providers and support services.",
            &["ID", "Income verification"],
            Some("County JFS / human services"),
        ));
        contacts.push(FundingContact {
            program: "SNAP E&T".to_string(),
            url_hint: Some("https://www.fns.usda.gov/snap/et".to_string()),
            phone: None,
        });
    }

    // Always worth asking, whatever the other flags said.
    steps.push(step(
        "Employer tuition / apprenticeship",
        "Ask HR about tuition assistance or apprenticeship sponsors for this pathway.",
        &["Offer letter (if applicable)"],
        None,
    ));

    let coverage = estimate_coverage(
        profile.unemployed,
        profile.veteran,
        state_grant.is_some(),
        snap_eligible,
    );

    FundingPlan {
        coverage,
        steps,
        contacts,
        notes,
    }
}

fn step(
    program: &str,
    action: &str,
    documents: &[&str],
    contact: Option<&str>,
) -> FundingStep {
    FundingStep {
        program: program.to_string(),
        action: action.to_string(),
        documents: documents.iter().map(|doc| doc.to_string()).collect(),
        contact: contact.map(str::to_string),
    }
}

/// Point model behind the headline tier. WIOA and VA are the strongest
/// signals; the state grant and SNAP E&T add weight.
fn estimate_coverage(
    unemployed: bool,
    veteran: bool,
    state_grant: bool,
    snap_eligible: bool,
) -> CoverageTier {
    let mut points = 0;
    if unemployed {
        points += 2;
    }
    if veteran {
        points += 2;
    }
    if state_grant {
        points += 1;
    }
    if snap_eligible {
        points += 1;
    }

    if points >= 3 {
        CoverageTier::Full
    } else if points >= 1 {
        CoverageTier::Partial
    } else {
        CoverageTier::None
    }
}
