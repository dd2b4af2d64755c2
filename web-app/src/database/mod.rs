use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::Error;

use self::entities::member;

pub mod convert;
pub mod entities;
pub mod fairing;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 500;

const SELECT_MEMBERS: &str = "SELECT \
        u.id::text AS id, \
        u.first_name AS display_name, \
        COALESCE(NULLIF(u.position, ''), NULLIF(u.role::text, ''), 'Member') AS position, \
        COALESCE(g.name, '') AS display_group, \
        u.bio, \
        u.created_at::timestamptz AS created_at \
    FROM public.users u \
    LEFT JOIN public.groups g ON g.id = u.group_id";

/// Filters for the members listing, already coerced into range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberQuery {
    pub status: Option<String>,
    pub name: Option<String>,
    pub team: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for MemberQuery {
    fn default() -> Self {
        Self {
            status: None,
            name: None,
            team: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl MemberQuery {
    /// Builds the listing query. Every filter value is bound, never spliced
    /// into the SQL text.
    pub fn build(&self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(SELECT_MEMBERS);
        let mut keyword = " WHERE ";

        if let Some(status) = &self.status {
            builder.push(keyword).push("u.status = ").push_bind(status.clone());
            keyword = " AND ";
        }

        if let Some(name) = &self.name {
            builder
                .push(keyword)
                .push("u.first_name ILIKE ")
                .push_bind(format!("%{}%", escape_like(name)))
                .push(" ESCAPE '\\'");
            keyword = " AND ";
        }

        if let Some(team) = &self.team {
            builder
                .push(keyword)
                .push("LOWER(g.name) = LOWER(")
                .push_bind(team.clone())
                .push(")");
        }

        builder
            .push(" ORDER BY u.created_at DESC NULLS LAST, u.id DESC LIMIT ")
            .push_bind(self.limit)
            .push(" OFFSET ")
            .push_bind(self.offset);

        builder
    }
}

/// Escapes LIKE wildcards so the needle only matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn get_members(db: &PgPool, query: &MemberQuery) -> Result<Vec<member::Model>, Error> {
    query
        .build()
        .build_query_as::<member::Model>()
        .fetch_all(db)
        .await
        .map_err(Error::DatabaseError)
}

/// Round trip used by the readiness check.
pub async fn get_database_time(db: &PgPool) -> Result<DateTime<Utc>, Error> {
    Ok(sqlx::query_scalar::<_, DateTime<Utc>>("SELECT now()").fetch_one(db).await?)
}
