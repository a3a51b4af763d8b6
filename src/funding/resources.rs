//! Static jurisdiction lookup tables.
//!
//! Data-only so new states can be added, localized, or audited without
//! touching the rule logic in `rules.rs`.

/// Workforce one-stop contact for the WIOA / ETPL step.
pub(crate) struct WorkforceResource {
    pub(crate) code: &'static str,
    pub(crate) label: &'static str,
    pub(crate) url: &'static str,
    pub(crate) phone: Option<&'static str>,
}

/// Generic locator used when the jurisdiction is unrecognized.
pub(crate) const GENERIC_ONE_STOP: WorkforceResource = WorkforceResource {
    code: "",
    label: "Find your local workforce center",
    url: "https://www.careeronestop.org/LocalHelp/local-help.aspx",
    phone: None,
};

const ONE_STOP_RESOURCES: &[WorkforceResource] = &[
    WorkforceResource {
        code: "OH",
        label: "OhioMeansJobs (local center)",
        url: "https://ohiojobhelp.ohio.gov/wps/portal/gov/oomj/local-offices",
        phone: None,
    },
    WorkforceResource {
        code: "MI",
        label: "Michigan Works! (local office)",
        url: "https://www.michiganworks.org/our-network",
        phone: None,
    },
    WorkforceResource {
        code: "PA",
        label: "PA CareerLink®",
        url: "https://www.pacareerlink.pa.gov/",
        phone: None,
    },
    WorkforceResource {
        code: "IN",
        label: "WorkOne (Indiana)",
        url: "https://www.in.gov/dwd/WorkOne/",
        phone: None,
    },
    WorkforceResource {
        code: "IL",
        label: "Illinois workNet",
        url: "https://www.illinoisworknet.com/",
        phone: None,
    },
    WorkforceResource {
        code: "NY",
        label: "NYS Career Centers",
        url: "https://dol.ny.gov/career-centers",
        phone: None,
    },
    WorkforceResource {
        code: "KY",
        label: "Kentucky Career Centers",
        url: "https://kcc.ky.gov/Pages/default.aspx",
        phone: None,
    },
    WorkforceResource {
        code: "WV",
        label: "WorkForce West Virginia",
        url: "https://workforcewv.org/job-seekers",
        phone: None,
    },
];

/// Short-term training grant program; only some states offer one.
pub(crate) struct StateGrant {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) label: &'static str,
    pub(crate) url: &'static str,
    pub(crate) action: &'static str,
}

const STATE_GRANTS: &[StateGrant] = &[
    StateGrant {
        code: "OH",
        name: "Ohio Short-Term Certificate grants",
        label: "Ohio Dept. Higher Education programs",
        url: "https://highered.ohio.gov/",
        action: "Ask your training provider which short-term certificate grants apply and how to apply.",
    },
    StateGrant {
        code: "MI",
        name: "Michigan Reconnect (short-term pathways)",
        label: "Michigan Reconnect",
        url: "https://www.michigan.gov/reconnect",
        action: "Check eligibility for tuition-free options or last-dollar aid for short-term credentials.",
    },
    StateGrant {
        code: "PA",
        name: "PA workforce training grants",
        label: "PA CareerLink® / local board",
        url: "https://www.pacareerlink.pa.gov/",
        action: "Ask about short-term training grants and supportive services in your county.",
    },
    StateGrant {
        code: "IN",
        name: "Next Level Jobs (Workforce Ready Grant)",
        label: "Indiana DWD",
        url: "https://www.nextleveljobs.org/",
        action: "See if your program is Workforce Ready eligible for tuition coverage.",
    },
];

fn canonical_code(state: Option<&str>) -> String {
    state.unwrap_or_default().trim().to_ascii_uppercase()
}

/// One-stop resource for the jurisdiction, falling back to the generic
/// locator for unrecognized codes.
pub(crate) fn one_stop_resource(state: Option<&str>) -> &'static WorkforceResource {
    let code = canonical_code(state);
    ONE_STOP_RESOURCES
        .iter()
        .find(|resource| resource.code == code)
        .unwrap_or(&GENERIC_ONE_STOP)
}

/// Known state grant program, if any; unknown jurisdictions get `None`.
pub(crate) fn short_term_grant(state: Option<&str>) -> Option<&'static StateGrant> {
    let code = canonical_code(state);
    STATE_GRANTS.iter().find(|grant| grant.code == code)
}
