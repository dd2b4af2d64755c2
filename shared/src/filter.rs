use std::collections::BTreeSet;

use crate::data::Member;

/// Search box plus role selector of the members browsing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    pub query: String,
    pub role: String,
}

impl MemberFilter {
    pub fn new(query: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            role: role.into(),
        }
    }

    #[must_use]
    pub fn matches(&self, member: &Member) -> bool {
        let query = self.query.trim().to_lowercase();
        let in_text = query.is_empty()
            || member.display_name.to_lowercase().contains(&query)
            || member.display_group.to_lowercase().contains(&query)
            || member
                .bio
                .as_deref()
                .is_some_and(|bio| bio.to_lowercase().contains(&query));

        let in_role =
            self.role.is_empty() || member.position.as_deref().unwrap_or_default() == self.role;

        in_text && in_role
    }

    /// Members passing the filter, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, members: &'a [Member]) -> Vec<&'a Member> {
        members.iter().filter(|m| self.matches(m)).collect()
    }
}

/// Distinct non-empty positions, sorted, for the role selector.
#[must_use]
pub fn roles(members: &[Member]) -> Vec<String> {
    members
        .iter()
        .filter_map(|m| m.position.as_deref())
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
