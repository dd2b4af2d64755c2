//! Shape-tolerant parsing of the members payload.
//!
//! Upstream records have gone through several schemas, so every logical field
//! is looked up under a list of candidate keys. Everything past this module
//! only sees [`Member`].

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::data::{Member, MemberId, UNNAMED};

/// Candidate keys for `display_name`, in priority order.
pub const NAME_CANDIDATES: &[&str] = &["/display_name", "/first_name", "/name"];
/// Candidate keys for `display_group`, in priority order.
pub const GROUP_CANDIDATES: &[&str] = &[
    "/display_group",
    "/display_groups",
    "/group_name",
    "/group/name",
];

/// Returns the first candidate (a JSON pointer) that resolves to something
/// other than `null` or an empty string.
pub fn resolve<'v>(record: &'v Value, candidates: &[&str]) -> Option<&'v Value> {
    candidates
        .iter()
        .filter_map(|pointer| record.pointer(pointer))
        .find(|value| !is_blank(value))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// String form of any JSON value. `null` becomes the empty string.
#[must_use]
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn resolve_string(record: &Value, candidates: &[&str]) -> Option<String> {
    resolve(record, candidates).map(coerce_string)
}

fn resolve_id(record: &Value, index: usize) -> MemberId {
    match record.get("id") {
        Some(Value::Number(n)) => n
            .as_i64()
            .map_or_else(|| MemberId::Text(n.to_string()), MemberId::Number),
        Some(value) if !is_blank(value) => MemberId::Text(coerce_string(value)),
        _ => i64::try_from(index)
            .map_or_else(|_| MemberId::Text(index.to_string()), MemberId::Number),
    }
}

fn resolve_timestamp(record: &Value) -> Option<DateTime<Utc>> {
    record
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
}

/// Normalizes one raw record found at `index` in the payload.
#[must_use]
pub fn normalize_member(record: &Value, index: usize) -> Member {
    Member {
        id: resolve_id(record, index),
        display_name: resolve_string(record, NAME_CANDIDATES)
            .unwrap_or_else(|| UNNAMED.to_string()),
        position: resolve_string(record, &["/position"]),
        display_group: resolve_string(record, GROUP_CANDIDATES).unwrap_or_default(),
        bio: resolve_string(record, &["/bio"]),
        created_at: resolve_timestamp(record),
    }
}

/// Normalizes a whole payload. Anything that is not an array yields no members.
#[must_use]
pub fn normalize_members(payload: &Value) -> Vec<Member> {
    payload
        .as_array()
        .map(|records| {
            records
                .iter()
                .enumerate()
                .map(|(index, record)| normalize_member(record, index))
                .collect()
        })
        .unwrap_or_default()
}
