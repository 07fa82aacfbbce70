//! User account store: registration, credential checks, profile updates.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;

use culina_auth::password;
use culina_core::{policy, Error, Result, User, UserId};

use crate::db::{parse_uuid, Database};

const SELECT_USER: &str = "SELECT id, email, name, password_hash, is_active, is_staff, \
     is_superuser, created_at FROM users";

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login email; normalized to lowercase before storage.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Store for user accounts.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
pub(crate) struct UserRow {
    pub(crate) id: String,
    pub(crate) email: String,
    pub(crate) name: String,
    pub(crate) password_hash: String,
    pub(crate) is_active: bool,
    pub(crate) is_staff: bool,
    pub(crate) is_superuser: bool,
    pub(crate) created_at: DateTime<Utc>,
}

impl UserRow {
    pub(crate) fn into_user(self) -> Result<User> {
        Ok(User {
            id: UserId::from_uuid(parse_uuid(&self.id)?),
            email: self.email,
            name: self.name,
            password_hash: self.password_hash,
            is_active: self.is_active,
            is_staff: self.is_staff,
            is_superuser: self.is_superuser,
            created_at: self.created_at,
        })
    }
}

impl UserStore {
    /// Create a store handle over the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// Register a new account.
    ///
    /// The email is normalized, the password checked against policy and
    /// hashed; the display name may be empty. An email already registered
    /// (in any casing) is rejected with [`Error::DuplicateEmail`].
    pub async fn create_user(&self, new: NewUser) -> Result<User> {
        let email = policy::normalize_email(&new.email)?;
        let name = policy::validate_optional_name("name", &new.name)?;
        policy::validate_password(&new.password)?;
        self.insert(email, name, &new.password, false, false).await
    }

    /// Register a superuser: staff and superuser flags set, no name required.
    pub async fn create_superuser(&self, email: &str, password: &str) -> Result<User> {
        let email = policy::normalize_email(email)?;
        policy::validate_password(password)?;
        self.insert(email, String::new(), password, true, true).await
    }

    async fn insert(
        &self,
        email: String,
        name: String,
        password: &str,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<User> {
        // Pre-check; the UNIQUE constraint still catches races.
        if self.find_by_email(&email).await?.is_some() {
            return Err(Error::duplicate_email(email));
        }
        let user = User {
            id: UserId::new(),
            email,
            name,
            password_hash: password::hash_password(password)?,
            is_active: true,
            is_staff,
            is_superuser,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO users (id, email, name, password_hash, is_active, is_staff, \
             is_superuser, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.is_staff)
        .bind(user.is_superuser)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Error::duplicate_email(&user.email)
            }
            other => Error::Database(other),
        })?;

        Ok(user)
    }

    /// Fetch a user by id.
    pub async fn get(&self, id: UserId) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, name, password_hash, is_active, is_staff, \
             is_superuser, created_at FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }

    /// Fetch a user by email, matching case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, name, password_hash, is_active, is_staff, \
             is_superuser, created_at FROM users WHERE email = ?",
        )
        .bind(email.trim().to_lowercase())
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }

    /// Check credentials and return the matching active user.
    ///
    /// Every failure mode (unknown email, wrong password, deactivated
    /// account) collapses into [`Error::InvalidCredentials`] so responses
    /// never reveal which part was wrong.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User> {
        let Some(user) = self.find_by_email(email).await? else {
            return Err(Error::InvalidCredentials);
        };
        if !user.is_active || !password::verify_password(password, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }
        Ok(user)
    }

    /// Apply a partial profile update and return the refreshed user.
    pub async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<User> {
        let Some(mut user) = self.get(id).await? else {
            return Err(Error::not_found("user", id.to_string()));
        };
        if let Some(name) = update.name {
            user.name = policy::validate_optional_name("name", &name)?;
        }
        if let Some(password) = update.password {
            policy::validate_password(&password)?;
            user.password_hash = password::hash_password(&password)?;
        }
        sqlx::query("UPDATE users SET name = ?, password_hash = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.password_hash)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(user)
    }

    /// List every account, ordered by email.
    pub async fn list(&self) -> Result<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!("{SELECT_USER} ORDER BY email"))
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(UserRow::into_user).collect()
    }

    /// Set the active flag on an account.
    pub async fn set_active(&self, id: UserId, is_active: bool) -> Result<()> {
        let result = sqlx::query("UPDATE users SET is_active = ? WHERE id = ?")
            .bind(is_active)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(Error::not_found("user", id.to_string()));
        }
        Ok(())
    }
}
