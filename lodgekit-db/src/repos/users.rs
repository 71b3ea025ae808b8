//! User repository
//!
//! Point lookups by id and email plus registration. No update or delete
//! path exists for users in this layer.

use lodgekit_core::models::NewUser;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Opaque credential; never serialized out to API consumers.
    #[serde(skip_serializing)]
    pub password: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a user by email. Missing rows are `Ok(None)`, not an error.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Look up a user by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, name, email, password FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(user)
    }

    /// Insert a user, returning the stored record with its generated id.
    ///
    /// A duplicate email surfaces as [`DbError::Conflict`], the unique
    /// constraint is the arbiter rather than a check-then-insert.
    pub async fn create(&self, user: &NewUser) -> Result<User, DbError> {
        user.validate()?;

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await
        .map_err(|err| {
            if let sqlx::Error::Database(db) = &err {
                if db.is_unique_violation() {
                    return DbError::Conflict {
                        resource: "user",
                        detail: format!("email '{}' already registered", user.email),
                    };
                }
            }
            DbError::Sqlx(err)
        })
    }
}
