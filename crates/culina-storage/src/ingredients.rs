//! Ingredient store.

use sqlx::sqlite::SqlitePool;

use culina_core::{policy, Ingredient, IngredientId, Result, UserId};

use crate::db::{parse_uuid, Database};

/// Store for owner-scoped ingredients.
#[derive(Debug, Clone)]
pub struct IngredientStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
pub(crate) struct IngredientRow {
    pub(crate) id: String,
    pub(crate) user_id: String,
    pub(crate) name: String,
}

impl IngredientRow {
    pub(crate) fn into_ingredient(self) -> Result<Ingredient> {
        Ok(Ingredient {
            id: IngredientId::from_uuid(parse_uuid(&self.id)?),
            user_id: UserId::from_uuid(parse_uuid(&self.user_id)?),
            name: self.name,
        })
    }
}

impl IngredientStore {
    /// Create a store handle over the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// Create an ingredient owned by the given user.
    pub async fn create(&self, user_id: UserId, name: &str) -> Result<Ingredient> {
        let name = policy::validate_name("name", name)?;
        let ingredient = Ingredient {
            id: IngredientId::new(),
            user_id,
            name,
        };
        sqlx::query("INSERT INTO ingredients (id, user_id, name) VALUES (?, ?, ?)")
            .bind(ingredient.id.to_string())
            .bind(user_id.to_string())
            .bind(&ingredient.name)
            .execute(&self.pool)
            .await?;
        Ok(ingredient)
    }

    /// List the user's ingredients, ordered by name descending.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Ingredient>> {
        let rows: Vec<IngredientRow> = sqlx::query_as(
            "SELECT id, user_id, name FROM ingredients WHERE user_id = ? ORDER BY name DESC",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(IngredientRow::into_ingredient).collect()
    }
}
