//! Car repository for CRUD and filtered queries over listings.

use crate::{DbError, Result as DbErrorResult};

use cb_core::{Car, CarOwner};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Optional listing filters, AND-combined when both are present.
#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    /// Case-insensitive substring match on vendor.
    pub txt: Option<String>,
    /// Upper bound on price, inclusive.
    pub max_price: Option<f64>,
}

pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, car: &Car) -> DbErrorResult<()> {
        let msgs = Self::encode_msgs(car.msgs.as_ref())?;

        sqlx::query(
            r#"
                INSERT INTO cars (id, vendor, speed, price, owner_id, owner_fullname, msgs)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(car.id.to_string())
        .bind(&car.vendor)
        .bind(car.speed)
        .bind(car.price)
        .bind(car.owner.id.to_string())
        .bind(&car.owner.fullname)
        .bind(msgs)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Car>> {
        let row = sqlx::query(
            r#"
                SELECT id, vendor, speed, price, owner_id, owner_fullname, msgs
                FROM cars
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    /// List cars matching the filter. `txt` matches the vendor
    /// case-insensitively as a substring; `max_price` is an inclusive
    /// ceiling. Rows come back in store iteration order.
    pub async fn find_filtered(&self, filter: &CarFilter) -> DbErrorResult<Vec<Car>> {
        let mut sql = String::from(
            "SELECT id, vendor, speed, price, owner_id, owner_fullname, msgs FROM cars",
        );
        let mut clauses: Vec<&str> = Vec::new();

        if filter.txt.is_some() {
            clauses.push("instr(lower(vendor), lower(?)) > 0");
        }
        if filter.max_price.is_some() {
            clauses.push("price <= ?");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        let mut query = sqlx::query(&sql);
        if let Some(ref txt) = filter.txt {
            query = query.bind(txt);
        }
        if let Some(max_price) = filter.max_price {
            query = query.bind(max_price);
        }

        let rows = query.fetch_all(&self.pool).await?;

        rows.iter().map(Self::map_row).collect()
    }

    /// Replace the stored record by id.
    pub async fn update(&self, car: &Car) -> DbErrorResult<()> {
        let msgs = Self::encode_msgs(car.msgs.as_ref())?;

        sqlx::query(
            r#"
                UPDATE cars
                SET vendor = ?, speed = ?, price = ?, owner_id = ?, owner_fullname = ?, msgs = ?
                WHERE id = ?
            "#,
        )
        .bind(&car.vendor)
        .bind(car.speed)
        .bind(car.price)
        .bind(car.owner.id.to_string())
        .bind(&car.owner.fullname)
        .bind(msgs)
        .bind(car.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns false when no row matched the id.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    fn encode_msgs(msgs: Option<&Vec<String>>) -> DbErrorResult<Option<String>> {
        msgs.map(|m| {
            serde_json::to_string(m).map_err(|e| DbError::CorruptRecord {
                message: format!("Cannot encode car.msgs: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Car> {
        let id: String = row.try_get("id")?;
        let owner_id: String = row.try_get("owner_id")?;
        let msgs: Option<String> = row.try_get("msgs")?;

        let msgs = msgs
            .map(|raw| {
                serde_json::from_str::<Vec<String>>(&raw).map_err(|e| DbError::CorruptRecord {
                    message: format!("Invalid JSON in car.msgs: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()?;

        Ok(Car {
            id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRecord {
                message: format!("Invalid UUID in car.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            vendor: row.try_get("vendor")?,
            speed: row.try_get("speed")?,
            price: row.try_get("price")?,
            owner: CarOwner {
                id: Uuid::parse_str(&owner_id).map_err(|e| DbError::CorruptRecord {
                    message: format!("Invalid UUID in car.owner_id: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?,
                fullname: row.try_get("owner_fullname")?,
            },
            msgs,
        })
    }
}
