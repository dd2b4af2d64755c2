//! UI state owned explicitly by whoever renders the crew, instead of living
//! in globals.

use std::{collections::HashMap, fmt, str::FromStr};

use thiserror::Error;

use crate::{
    buckets::{bucket_by_team, default_selection, TeamBucket},
    data::{Member, MemberId},
};

/// Team-bucket view of the crew with the currently selected team.
#[derive(Debug, Clone, Default)]
pub struct CrewView {
    members: Vec<Member>,
    team: Option<usize>,
}

impl CrewView {
    #[must_use]
    pub fn new(members: Vec<Member>) -> Self {
        let mut view = Self::default();
        view.set_members(members);
        view
    }

    /// Replaces the member list and resets the selection to the default bucket.
    pub fn set_members(&mut self, members: Vec<Member>) {
        self.members = members;
        self.team = default_selection(&self.buckets());
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    #[must_use]
    pub fn buckets(&self) -> Vec<TeamBucket<'_>> {
        bucket_by_team(&self.members)
    }

    #[must_use]
    pub fn team_index(&self) -> Option<usize> {
        self.team
    }

    #[must_use]
    pub fn current_bucket(&self) -> Option<TeamBucket<'_>> {
        let index = self.team?;
        self.buckets().into_iter().nth(index)
    }

    /// Advances to the next bucket, wrapping around after the last one.
    pub fn next_team(&mut self) {
        let count = self.buckets().len();
        if count == 0 {
            return;
        }
        self.team = Some(self.team.map_or(0, |index| (index + 1) % count));
    }
}

/// The member whose full profile is open, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelection {
    selected: Option<MemberId>,
}

impl DetailSelection {
    pub fn select(&mut self, id: MemberId) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&MemberId> {
        self.selected.as_ref()
    }

    /// Looks the selection up in `members`. A stale id resolves to nothing.
    #[must_use]
    pub fn resolve<'a>(&self, members: &'a [Member]) -> Option<&'a Member> {
        let id = self.selected.as_ref()?;
        members.iter().find(|m| &m.id == id)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not access the preference store: {0}")]
    Io(#[from] std::io::Error),
    #[error("The preference store is corrupt: {0}")]
    Format(#[from] serde_json::Error),
}

/// Key-value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Aurora,
    Monochrome,
}

impl Theme {
    pub const KEY: &'static str = "theme";

    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Theme::Aurora => Theme::Monochrome,
            Theme::Monochrome => Theme::Aurora,
        }
    }

    /// Stored theme, or the default when nothing valid is stored.
    pub fn load(store: &impl PreferenceStore) -> Self {
        store
            .get(Self::KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn save(self, store: &mut impl PreferenceStore) -> Result<(), StoreError> {
        store.set(Self::KEY, &self.to_string())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Aurora => "aurora",
            Theme::Monochrome => "monochrome",
        })
    }
}

#[derive(Debug, Error)]
#[error("Unknown theme '{0}'")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aurora" => Ok(Theme::Aurora),
            "monochrome" => Ok(Theme::Monochrome),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buckets::ALL_MEMBERS;

    fn member(id: i64, group: &str) -> Member {
        Member {
            id: MemberId::Number(id),
            display_name: format!("Member {id}"),
            position: None,
            display_group: group.into(),
            bio: None,
            created_at: None,
        }
    }

    #[test]
    fn starts_on_board_bucket() {
        let view = CrewView::new(vec![member(1, "Pit"), member(2, "Board")]);
        assert_eq!(view.team_index(), Some(0));
        assert_eq!(view.current_bucket().map(|b| b.name), Some("Board".into()));
    }

    #[test]
    fn starts_on_all_members_without_board() {
        let view = CrewView::new(vec![member(1, "Pit")]);
        assert_eq!(
            view.current_bucket().map(|b| b.name),
            Some(ALL_MEMBERS.into())
        );
    }

    #[test]
    fn next_team_wraps_around() {
        let mut view = CrewView::new(vec![member(1, "Board"), member(2, "Pit")]);
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(view.current_bucket().map(|b| b.name).unwrap_or_default());
            view.next_team();
        }
        assert_eq!(seen, vec!["Board", "Pit", ALL_MEMBERS, "Board"]);
    }

    #[test]
    fn empty_view_has_no_selection() {
        let mut view = CrewView::new(Vec::new());
        view.next_team();
        assert_eq!(view.team_index(), None);
        assert!(view.current_bucket().is_none());
    }

    #[test]
    fn replacing_members_resets_selection() {
        let mut view = CrewView::new(vec![member(1, "Board"), member(2, "Pit")]);
        view.next_team();
        view.set_members(vec![member(3, "Media")]);
        assert_eq!(
            view.current_bucket().map(|b| b.name),
            Some(ALL_MEMBERS.into())
        );
    }

    #[test]
    fn detail_selection_holds_one_member() {
        let members = vec![member(1, "Pit"), member(2, "Media")];
        let mut detail = DetailSelection::default();
        assert!(detail.resolve(&members).is_none());

        detail.select(MemberId::Number(1));
        detail.select(MemberId::Number(2));
        assert_eq!(detail.resolve(&members).map(|m| &m.id), Some(&MemberId::Number(2)));

        detail.close();
        assert_eq!(detail.selected_id(), None);
    }

    #[test]
    fn stale_selection_resolves_to_nothing() {
        let mut detail = DetailSelection::default();
        detail.select(MemberId::Number(99));
        assert!(detail.resolve(&[member(1, "Pit")]).is_none());
    }

    #[test]
    fn theme_round_trips_through_store() {
        let mut store = MemoryStore::default();
        assert_eq!(Theme::load(&store), Theme::Aurora);

        Theme::Aurora.cycle().save(&mut store).unwrap();
        assert_eq!(Theme::load(&store), Theme::Monochrome);
    }

    #[test]
    fn unknown_stored_theme_falls_back() {
        let mut store = MemoryStore::default();
        store.set(Theme::KEY, "neon").unwrap();
        assert_eq!(Theme::load(&store), Theme::Aurora);
    }
}
