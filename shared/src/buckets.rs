use std::collections::HashMap;

use crate::data::Member;

/// Label of the synthetic bucket holding every member.
pub const ALL_MEMBERS: &str = "All Members";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    Team,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamBucket<'a> {
    pub name: String,
    pub kind: BucketKind,
    pub members: Vec<&'a Member>,
}

impl TeamBucket<'_> {
    #[must_use]
    pub fn is_board(&self) -> bool {
        self.kind == BucketKind::Team && is_board(&self.name)
    }
}

/// Key used to merge case and whitespace variants of one group name.
#[must_use]
pub fn canonical_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Loose match: any label containing "board" in any case counts.
#[must_use]
pub fn is_board(name: &str) -> bool {
    name.to_lowercase().contains("board")
}

/// Groups members into team buckets.
///
/// Buckets appear in first-seen order, except that the first board bucket is
/// moved to the front. Members without a group only show up in the trailing
/// "All Members" bucket, which exists whenever there is at least one member.
#[must_use]
pub fn bucket_by_team(members: &[Member]) -> Vec<TeamBucket<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<TeamBucket<'_>> = Vec::new();

    for member in members {
        let label = member.display_group.trim();
        if label.is_empty() {
            continue;
        }

        let slot = *index.entry(canonical_key(label)).or_insert_with(|| {
            buckets.push(TeamBucket {
                name: label.to_string(),
                kind: BucketKind::Team,
                members: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].members.push(member);
    }

    if let Some(board) = buckets.iter().position(TeamBucket::is_board) {
        let bucket = buckets.remove(board);
        buckets.insert(0, bucket);
    }

    if !members.is_empty() {
        buckets.push(TeamBucket {
            name: ALL_MEMBERS.to_string(),
            kind: BucketKind::All,
            members: members.iter().collect(),
        });
    }

    buckets
}

/// Bucket shown first: the board, else "All Members", else the first one.
/// `None` means there is nothing to show.
#[must_use]
pub fn default_selection(buckets: &[TeamBucket<'_>]) -> Option<usize> {
    if buckets.is_empty() {
        return None;
    }

    buckets
        .iter()
        .position(TeamBucket::is_board)
        .or_else(|| buckets.iter().position(|b| b.kind == BucketKind::All))
        .or(Some(0))
}
