use std::num::IntErrorKind;

use crate::database::{MemberQuery, DEFAULT_LIMIT, MAX_LIMIT};

/// Raw query string of `/api/members`. Every field is kept as text so that
/// malformed numbers get coerced instead of rejecting the request.
#[derive(Debug, Default, FromForm)]
pub struct MemberParams {
    pub status: Option<String>,
    pub q: Option<String>,
    pub team: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<MemberParams> for MemberQuery {
    fn from(value: MemberParams) -> Self {
        Self {
            status: non_empty(value.status),
            name: non_empty(value.q),
            team: value.team.filter(|team| {
                let team = team.trim();
                !team.is_empty() && !team.eq_ignore_ascii_case("all")
            }),
            limit: parse_limit(value.limit.as_deref()),
            offset: parse_offset(value.offset.as_deref()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Missing, unparsable or non-positive limits fall back to the default;
/// large ones are clamped.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    match raw.and_then(parse_saturating) {
        Some(limit) if limit > 0 => limit.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    }
}

/// Missing, unparsable or negative offsets start from the beginning.
pub fn parse_offset(raw: Option<&str>) -> i64 {
    raw.and_then(parse_saturating)
        .filter(|offset| *offset >= 0)
        .unwrap_or(0)
}

/// Integers too large for `i64` saturate instead of counting as garbage.
fn parse_saturating(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Some(i64::MIN),
        Err(_) => None,
    }
}
