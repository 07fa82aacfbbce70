//! Tag store.

use sqlx::sqlite::SqlitePool;

use culina_core::{policy, Result, Tag, TagId, UserId};

use crate::db::{parse_uuid, Database};

/// Store for owner-scoped tags.
#[derive(Debug, Clone)]
pub struct TagStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
pub(crate) struct TagRow {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) name: String,
}

impl TagRow {
    pub(crate) fn into_tag(self) -> Result<Tag> {
        Ok(Tag {
            id: TagId::from_uuid(parse_uuid(&self.id)?),
            user_id: UserId::from_uuid(parse_uuid(&self.user_id)?),
            name: self.name,
        })
    }
}

impl TagStore {
    /// Create a store handle over the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// Create a tag owned by the given user.
    pub async fn create(&self, user_id: UserId, name: &str) -> Result<Tag> {
        let name = policy::validate_name("name", name)?;
        let tag = Tag {
            id: TagId::new(),
            user_id,
            name,
        };
        sqlx::query("INSERT INTO tags (id, user_id, name) VALUES (?, ?, ?)")
            .bind(tag.id.to_string())
            .bind(user_id.to_string())
            .bind(&tag.name)
            .execute(&self.pool)
            .await?;
        Ok(tag)
    }

    /// List the user's tags, ordered by name descending.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Tag>> {
        let rows: Vec<TagRow> = sqlx::query_as(
            "SELECT id, user_id, name FROM tags WHERE user_id = ? ORDER BY name DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(TagRow::into_tag).collect()
    }
}
