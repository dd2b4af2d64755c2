use chrono::{DateTime, Utc};

/// One row of the members listing query. Only public columns are selected.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Model {
    pub id: String,
    pub display_name: Option<String>,
    pub position: String,
    pub display_group: String,
    pub bio: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
