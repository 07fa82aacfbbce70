//! API token store.
//!
//! Tokens are opaque 32-character keys, one per user. [`TokenStore`] also
//! implements [`TokenValidator`] so it can be handed straight to the auth
//! middleware.

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;

use culina_auth::{AuthError, AuthenticatedUser, TokenValidator};
use culina_core::{Result, Token, User, UserId};

use crate::db::{parse_uuid, Database};
use crate::users::UserRow;

/// Store for API tokens.
#[derive(Debug, Clone)]
pub struct TokenStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct TokenRow {
    key: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl TokenRow {
    fn into_token(self) -> Result<Token> {
        Ok(Token {
            key: self.key,
            user_id: UserId::from_uuid(parse_uuid(&self.user_id)?),
            created_at: self.created_at,
        })
    }
}

impl TokenStore {
    /// Create a store handle over the given database.
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    /// Issue a token for the user, returning the existing one if present.
    pub async fn issue(&self, user_id: UserId) -> Result<Token> {
        if let Some(existing) = self.for_user(user_id).await? {
            return Ok(existing);
        }
        let token = Token {
            key: culina_auth::token::generate_key(),
            user_id,
            created_at: Utc::now(),
        };
        let inserted = sqlx::query(
            "INSERT INTO tokens (key, user_id, created_at) VALUES (?, ?, ?) \
             ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(&token.key)
        .bind(user_id.to_string())
        .bind(token.created_at)
        .execute(&self.pool)
        .await?;
        if inserted.rows_affected() == 0 {
            // Lost a race with a concurrent issue; return the winner.
            if let Some(existing) = self.for_user(user_id).await? {
                return Ok(existing);
            }
        }
        Ok(token)
    }

    /// Discard the user's current token and issue a fresh one.
    pub async fn rotate(&self, user_id: UserId) -> Result<Token> {
        sqlx::query("DELETE FROM tokens WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        self.issue(user_id).await
    }

    /// Fetch the token currently issued to a user.
    pub async fn for_user(&self, user_id: UserId) -> Result<Option<Token>> {
        let row: Option<TokenRow> =
            sqlx::query_as("SELECT key, user_id, created_at FROM tokens WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_optional(&self.pool)
                .await?;
        row.map(TokenRow::into_token).transpose()
    }

    /// Resolve a key to its owning user, active or not.
    pub async fn resolve(&self, key: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT u.id, u.email, u.name, u.password_hash, u.is_active, u.is_staff, \
             u.is_superuser, u.created_at \
             FROM users u JOIN tokens t ON t.user_id = u.id WHERE t.key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }
}

impl TokenValidator for TokenStore {
    fn validate(
        &self,
        token: &str,
    ) -> Pin<Box<dyn Future<Output = std::result::Result<AuthenticatedUser, AuthError>> + Send + '_>>
    {
        let token = token.to_string();
        Box::pin(async move {
            match self.resolve(&token).await {
                Ok(Some(user)) if user.is_active => Ok(AuthenticatedUser {
                    id: user.id,
                    email: user.email,
                }),
                Ok(Some(_)) => Err(AuthError::InactiveUser),
                Ok(None) => Err(AuthError::InvalidToken),
                Err(e) => Err(AuthError::store(e.to_string())),
            }
        })
    }
}
