use std::{convert::Infallible, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a record carries no usable name.
pub const UNNAMED: &str = "Unnamed";

/// Row identifier. The service emits integers, but clients accept strings too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberId::Number(id) => write!(f, "{id}"),
            MemberId::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for MemberId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map_or_else(|_| MemberId::Text(s.to_string()), MemberId::Number))
    }
}

impl From<i64> for MemberId {
    fn from(value: i64) -> Self {
        MemberId::Number(value)
    }
}

/// A member as it travels over the wire. Credentials, email and account
/// status have no place here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub display_name: String,
    pub position: Option<String>,
    pub display_group: String,
    pub bio: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Up to two initials taken from the first words of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();

        if initials.is_empty() {
            "UN".to_string()
        } else {
            initials
        }
    }

    /// `position · group`, skipping whichever is empty.
    #[must_use]
    pub fn meta_line(&self) -> String {
        [self.position.as_deref(), Some(self.display_group.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
