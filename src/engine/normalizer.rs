//! Catalog normalizer: a total mapping from arbitrary record-shaped JSON to
//! canonical [`Pathway`] values.
//!
//! Malformed entries are never rejected and never dropped; every field has a
//! safe default, and the output preserves the input's order and length so
//! pathway ids stay resolvable against the original catalog.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use super::domain::{DeliveryMode, DeviceNeed, JobsMeta, Pathway, PathwayModule};

pub fn normalize_catalog(raw: &[Value]) -> Vec<Pathway> {
    raw.iter()
        .enumerate()
        .map(|(index, record)| normalize_record(record, index))
        .collect()
}

fn normalize_record(record: &Value, index: usize) -> Pathway {
    let jobs_meta = field(record, &["jobsMeta", "jobs_meta"]);

    Pathway {
        id: string_at(record, &["id"]).unwrap_or_else(|| format!("pw_{index}")),
        title: string_at(record, &["title"]).unwrap_or_else(|| format!("Pathway {}", index + 1)),
        cluster: string_at(record, &["cluster"]).unwrap_or_default(),
        est_weeks: number_at(record, &["estWeeks", "est_weeks"]).filter(|weeks| *weeks >= 0.0),
        est_cost: number_at(record, &["estCost", "est_cost"])
            .map(|cost| cost.max(0.0))
            .unwrap_or(0.0),
        modules: modules_at(record),
        first_credential: credential_at(record),
        partners: name_list(field(record, &["partners"])),
        jobs_meta: JobsMeta {
            median_start: jobs_meta
                .and_then(|meta| number_at(meta, &["medianStart", "median_start"]))
                .filter(|pay| *pay >= 0.0),
            openings_index: jobs_meta
                .and_then(|meta| number_at(meta, &["openingsIndex", "openings_index"])),
            local_employers: name_list(
                jobs_meta.and_then(|meta| field(meta, &["localEmployers", "local_employers"])),
            ),
        },
        prerequisites: name_list(field(record, &["prerequisites"])),
        device_needs: string_at(record, &["deviceNeeds", "device_needs"])
            .map(|token| DeviceNeed::parse(&token))
            .unwrap_or_default(),
        delivery: string_at(record, &["delivery"])
            .map(|token| DeliveryMode::parse(&token))
            .unwrap_or_default(),
        next_cohort_date: date_at(record, &["nextCohortDate", "next_cohort_date"]),
    }
}

/// First value present under any of the candidate keys.
fn field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let map = record.as_object()?;
    keys.iter().find_map(|key| map.get(*key))
}

fn string_at(record: &Value, keys: &[&str]) -> Option<String> {
    field(record, keys)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Accepts JSON numbers as well as numeric strings; only finite values pass.
fn number_at(record: &Value, keys: &[&str]) -> Option<f64> {
    lenient_number(field(record, keys)?)
}

fn lenient_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn modules_at(record: &Value) -> Vec<PathwayModule> {
    let Some(Value::Array(entries)) = field(record, &["modules"]) else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| match entry {
            Value::String(title) => PathwayModule {
                title: Some(title.trim().to_string()).filter(|t| !t.is_empty()),
                slug: None,
                minutes: None,
            },
            _ => PathwayModule {
                title: string_at(entry, &["title"]),
                slug: string_at(entry, &["slug"]),
                minutes: number_at(entry, &["minutes"]).filter(|m| *m >= 0.0),
            },
        })
        .collect()
}

fn credential_at(record: &Value) -> Option<String> {
    let credential = field(record, &["firstCredential", "first_credential"])?;
    match credential {
        Value::String(name) => Some(name.trim().to_string()).filter(|n| !n.is_empty()),
        _ => string_at(credential, &["name"]),
    }
}

/// Flattens a list of names given as bare strings or `{"name": ...}` objects.
fn name_list(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(name.trim().to_string()),
            _ => string_at(entry, &["name"]),
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn date_at(record: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    let raw = string_at(record, keys)?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}
