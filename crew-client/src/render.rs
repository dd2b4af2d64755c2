use shared::{buckets::TeamBucket, data::Member};

pub const NO_MATCHES: &str = "No matches. Try a different search or clear filters.";
pub const NO_MEMBERS: &str = "No crew members yet.";

/// Short card as shown in lists.
pub fn card(member: &Member) -> String {
    let mut card = format!("[{}] {} (#{})", member.initials(), member.display_name, member.id);
    let meta = member.meta_line();
    if !meta.is_empty() {
        card.push_str(&format!("\n    {meta}"));
    }
    if let Some(bio) = member.bio.as_deref().filter(|bio| !bio.is_empty()) {
        card.push_str(&format!("\n    {bio}"));
    }
    card
}

pub fn list<'a>(members: impl IntoIterator<Item = &'a Member>, empty: &str) -> String {
    let cards: Vec<String> = members.into_iter().map(card).collect();
    if cards.is_empty() {
        empty.to_string()
    } else {
        cards.join("\n")
    }
}

/// Header line with the team label and its position, then the cards.
pub fn bucket(bucket: &TeamBucket<'_>, index: usize, count: usize) -> String {
    format!(
        "== {} ({}/{count}) ==\n{}",
        bucket.name,
        index + 1,
        list(bucket.members.iter().copied(), NO_MEMBERS)
    )
}

/// Everything known about one member.
pub fn detail(member: &Member) -> String {
    let mut detail = format!("{} (#{})", member.display_name, member.id);
    if let Some(position) = member.position.as_deref() {
        detail.push_str(&format!("\nPosition: {position}"));
    }
    if !member.display_group.is_empty() {
        detail.push_str(&format!("\nTeam: {}", member.display_group));
    }
    if let Some(created_at) = member.created_at {
        detail.push_str(&format!("\nJoined: {}", created_at.format("%Y-%m-%d")));
    }
    if let Some(bio) = member.bio.as_deref() {
        detail.push_str(&format!("\n\n{bio}"));
    }
    detail
}
