//! Recipe store.
//!
//! Recipes carry two attachment sets (tags, ingredients) written inside the
//! same transaction as the recipe row. Referenced ids are checked for
//! existence before any write.

use sqlx::sqlite::SqlitePool;
use sqlx::{Sqlite, Transaction};

use culina_core::{
    policy, Error, Ingredient, IngredientId, Recipe, RecipeId, Result, Tag, TagId, UserId,
};

use crate::db::{parse_uuid, Database};
use crate::ingredients::IngredientRow;
use crate::tags::TagRow;

/// Full payload for creating or replacing a recipe.
#[derive(Debug, Clone)]
pub struct RecipeInput {
    pub title: String,
    pub time_minutes: i64,
    pub price: f64,
    pub link: String,
    pub tags: Vec<TagId>,
    pub ingredients: Vec<IngredientId>,
}

/// Partial update. `None` fields are left unchanged; `Some(vec![])` on an
/// attachment set clears it.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub time_minutes: Option<i64>,
    pub price: Option<f64>,
    pub link: Option<String>,
    pub tags: Option<Vec<TagId>>,
    pub ingredients: Option<Vec<IngredientId>>,
}

/// Store for recipes and their attachments.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: String,
    user_id: String,
    title: String,
    time_minutes: i64,
    price: f64,
    link: String,
}

impl RecipeStore {
    /// Create a store handle over the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// List the user's recipes in insertion order.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Recipe>> {
        let rows: Vec<RecipeRow> = sqlx::query_as(
            "SELECT id, user_id, title, time_minutes, price, link FROM recipes \
             WHERE user_id = ?",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;
        let mut recipes = Vec::with_capacity(rows.len());
        for row in rows {
            recipes.push(self.hydrate(row).await?);
        }
        Ok(recipes)
    }

    /// Fetch one of the user's recipes.
    ///
    /// A recipe owned by someone else reports not-found, the same as a
    /// missing one.
    pub async fn get(&self, id: RecipeId, user_id: UserId) -> Result<Recipe> {
        let row: Option<RecipeRow> = sqlx::query_as(
            "SELECT id, user_id, title, time_minutes, price, link FROM recipes \
             WHERE id = ? AND user_id = ?",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => self.hydrate(row).await,
            None => Err(Error::not_found("recipe", id.to_string())),
        }
    }

    /// Create a recipe with its attachments.
    pub async fn create(&self, user_id: UserId, input: RecipeInput) -> Result<Recipe> {
        let input = self.check(input).await?;
        let id = RecipeId::new();
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO recipes (id, user_id, title, time_minutes, price, link) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(&input.title)
        .bind(input.time_minutes)
        .bind(input.price)
        .bind(&input.link)
        .execute(&mut *tx)
        .await?;
        attach(&mut tx, id, &input.tags, &input.ingredients).await?;
        tx.commit().await?;
        Ok(assemble(id, user_id, input))
    }

    /// Replace every field of the user's recipe.
    ///
    /// Attachments absent from the payload are removed.
    pub async fn replace(
        &self,
        id: RecipeId,
        user_id: UserId,
        input: RecipeInput,
    ) -> Result<Recipe> {
        self.get(id, user_id).await?;
        let input = self.check(input).await?;
        self.write(id, user_id, input).await
    }

    /// Apply a partial update to the user's recipe.
    pub async fn update(
        &self,
        id: RecipeId,
        user_id: UserId,
        patch: RecipePatch,
    ) -> Result<Recipe> {
        let current = self.get(id, user_id).await?;
        let merged = RecipeInput {
            title: patch.title.unwrap_or(current.title),
            time_minutes: patch.time_minutes.unwrap_or(current.time_minutes),
            price: patch.price.unwrap_or(current.price),
            link: patch.link.unwrap_or(current.link),
            tags: patch.tags.unwrap_or(current.tags),
            ingredients: patch.ingredients.unwrap_or(current.ingredients),
        };
        let merged = self.check(merged).await?;
        self.write(id, user_id, merged).await
    }

    /// Delete the user's recipe; attachments cascade.
    pub async fn delete(&self, id: RecipeId, user_id: UserId) -> Result<()> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ? AND user_id = ?")
            .bind(id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::not_found("recipe", id.to_string()));
        }
        Ok(())
    }

    /// Tags attached to a recipe, in attachment order.
    pub async fn tags_for(&self, id: RecipeId) -> Result<Vec<Tag>> {
        let rows: Vec<TagRow> = sqlx::query_as(
            "SELECT t.id, t.user_id, t.name FROM tags t \
             JOIN recipe_tags rt ON rt.tag_id = t.id \
             WHERE rt.recipe_id = ? ORDER BY rt.rowid",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(TagRow::into_tag).collect()
    }

    /// Ingredients attached to a recipe, in attachment order.
    pub async fn ingredients_for(&self, id: RecipeId) -> Result<Vec<Ingredient>> {
        let rows: Vec<IngredientRow> = sqlx::query_as(
            "SELECT i.id, i.user_id, i.name FROM ingredients i \
             JOIN recipe_ingredients ri ON ri.ingredient_id = i.id \
             WHERE ri.recipe_id = ? ORDER BY ri.rowid",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(IngredientRow::into_ingredient).collect()
    }

    async fn write(&self, id: RecipeId, user_id: UserId, input: RecipeInput) -> Result<Recipe> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "UPDATE recipes SET title = ?, time_minutes = ?, price = ?, link = ? WHERE id = ?",
        )
        .bind(&input.title)
        .bind(input.time_minutes)
        .bind(input.price)
        .bind(&input.link)
        .bind(id.to_string())
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;
        attach(&mut tx, id, &input.tags, &input.ingredients).await?;
        tx.commit().await?;
        Ok(assemble(id, user_id, input))
    }

    /// Validate field policy and referenced ids, returning a normalized input.
    ///
    /// Referenced tags and ingredients are checked for existence only, not
    /// for ownership.
    async fn check(&self, input: RecipeInput) -> Result<RecipeInput> {
        let RecipeInput {
            title,
            time_minutes,
            price,
            link,
            tags,
            ingredients,
        } = input;
        let title = policy::validate_name("title", &title)?;
        if time_minutes < 0 {
            return Err(Error::validation_field(
                "time_minutes",
                "must not be negative",
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(Error::validation_field(
                "price",
                "must be a non-negative number",
            ));
        }
        if link.chars().count() > policy::MAX_FIELD_LEN {
            return Err(Error::validation_field(
                "link",
                format!("must be at most {} characters", policy::MAX_FIELD_LEN),
            ));
        }
        let tags = dedupe(tags);
        let ingredients = dedupe(ingredients);
        for tag in &tags {
            if !self.id_exists("tags", &tag.to_string()).await? {
                return Err(Error::validation_field(
                    "tags",
                    format!("unknown tag: {tag}"),
                ));
            }
        }
        for ingredient in &ingredients {
            if !self.id_exists("ingredients", &ingredient.to_string()).await? {
                return Err(Error::validation_field(
                    "ingredients",
                    format!("unknown ingredient: {ingredient}"),
                ));
            }
        }
        Ok(RecipeInput {
            title,
            time_minutes,
            price,
            link,
            tags,
            ingredients,
        })
    }

    async fn id_exists(&self, table: &'static str, id: &str) -> Result<bool> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?)");
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn hydrate(&self, row: RecipeRow) -> Result<Recipe> {
        let tag_ids: Vec<String> = sqlx::query_scalar(
            "SELECT tag_id FROM recipe_tags WHERE recipe_id = ? ORDER BY rowid",
        )
        .bind(row.id.as_str())
        .fetch_all(&self.pool)
        .await?;
        let ingredient_ids: Vec<String> = sqlx::query_scalar(
            "SELECT ingredient_id FROM recipe_ingredients WHERE recipe_id = ? ORDER BY rowid",
        )
        .bind(row.id.as_str())
        .fetch_all(&self.pool)
        .await?;
        let tags = tag_ids
            .iter()
            .map(|raw| parse_uuid(raw).map(TagId::from_uuid))
            .collect::<Result<Vec<_>>>()?;
        let ingredients = ingredient_ids
            .iter()
            .map(|raw| parse_uuid(raw).map(IngredientId::from_uuid))
            .collect::<Result<Vec<_>>>()?;
        Ok(Recipe {
            id: RecipeId::from_uuid(parse_uuid(&row.id)?),
            user_id: UserId::from_uuid(parse_uuid(&row.user_id)?),
            title: row.title,
            time_minutes: row.time_minutes,
            price: row.price,
            link: row.link,
            tags,
            ingredients,
        })
    }
}

async fn attach(
    tx: &mut Transaction<'_, Sqlite>,
    id: RecipeId,
    tags: &[TagId],
    ingredients: &[IngredientId],
) -> Result<()> {
    for tag in tags {
        sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES (?, ?)")
            .bind(id.to_string())
            .bind(tag.to_string())
            .execute(&mut **tx)
            .await?;
    }
    for ingredient in ingredients {
        sqlx::query("INSERT INTO recipe_ingredients (recipe_id, ingredient_id) VALUES (?, ?)")
            .bind(id.to_string())
            .bind(ingredient.to_string())
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

fn assemble(id: RecipeId, user_id: UserId, input: RecipeInput) -> Recipe {
    Recipe {
        id,
        user_id,
        title: input.title,
        time_minutes: input.time_minutes,
        price: input.price,
        link: input.link,
        tags: input.tags,
        ingredients: input.ingredients,
    }
}

/// Drop repeated ids, keeping first occurrences in order.
fn dedupe<T: PartialEq + Copy>(ids: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
