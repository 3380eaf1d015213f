//! User repository.

use crate::{DbError, Result as DbErrorResult};

use cb_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, username, password, fullname, score, is_admin)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .bind(user.score)
        .bind(user.is_admin)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, password, fullname, score, is_admin
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, username, password, fullname, score, is_admin
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    /// Replace the stored record by id.
    pub async fn update(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users
                SET username = ?, password = ?, fullname = ?, score = ?, is_admin = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .bind(user.score)
        .bind(user.is_admin)
        .bind(user.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<User> {
        let id: String = row.try_get("id")?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRecord {
                message: format!("Invalid UUID in user.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
            fullname: row.try_get("fullname")?,
            score: row.try_get("score")?,
            is_admin: row.try_get("is_admin")?,
        })
    }
}
