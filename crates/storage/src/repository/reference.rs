//! Name → id resolution for referenced rows.

use std::fmt;

use sqlx::PgConnection;

/// Table a reference points into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    EventType,
    Competition,
}

impl Target {
    pub fn noun(self) -> &'static str {
        match self {
            Self::EventType => "event type",
            Self::Competition => "competition",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::EventType => "Event type",
            Self::Competition => "Competition",
        }
    }

    // Names are not unique for competitions; the oldest row wins. The key
    // share lock keeps the row alive until the caller's write commits.
    fn lookup_sql(self) -> &'static str {
        match self {
            Self::EventType => {
                "SELECT id FROM event_types WHERE name = $1 ORDER BY id LIMIT 1 FOR KEY SHARE"
            }
            Self::Competition => {
                "SELECT id FROM competitions WHERE name = $1 ORDER BY id LIMIT 1 FOR KEY SHARE"
            }
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// How a resource refers to another table by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub target: Target,
    /// When set, a name that matches nothing rejects the write instead of
    /// storing a null reference.
    pub required: bool,
}

impl Reference {
    pub const fn optional(target: Target) -> Self {
        Self {
            target,
            required: false,
        }
    }

    pub const fn required(target: Target) -> Self {
        Self {
            target,
            required: true,
        }
    }
}

/// Looks up the id of the row named `name`. Never creates rows.
pub async fn resolve(
    conn: &mut PgConnection,
    target: Target,
    name: &str,
) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(target.lookup_sql())
        .bind(name)
        .fetch_optional(conn)
        .await
}
