/// Offer model and database operations
///
/// An offer is a user volunteering to execute an order.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE offers (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     order_id INTEGER NOT NULL REFERENCES orders (id),
///     executor_id INTEGER NOT NULL REFERENCES users (id)
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

/// Offer model representing a single `offers` row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Offer {
    pub id: i64,
    pub order_id: i64,
    pub executor_id: i64,
}

/// Input for creating a new offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOffer {
    pub order_id: i64,
    pub executor_id: i64,
}

/// Input for replacing an existing offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOffer {
    pub order_id: i64,
    pub executor_id: i64,
}

impl Offer {
    /// Creates a new offer in the database
    pub async fn create(pool: &SqlitePool, data: CreateOffer) -> Result<Self, sqlx::Error> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            INSERT INTO offers (order_id, executor_id)
            VALUES (?, ?)
            RETURNING id, order_id, executor_id
            "#,
        )
        .bind(data.order_id)
        .bind(data.executor_id)
        .fetch_one(pool)
        .await?;

        Ok(offer)
    }

    /// Finds an offer by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let offer = sqlx::query_as::<_, Offer>(
            "SELECT id, order_id, executor_id FROM offers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(offer)
    }

    /// Lists all offers in insertion order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let offers = sqlx::query_as::<_, Offer>(
            "SELECT id, order_id, executor_id FROM offers ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        Ok(offers)
    }

    /// Replaces both references of an existing offer
    ///
    /// # Returns
    ///
    /// The updated offer if found, None if the offer doesn't exist
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateOffer,
    ) -> Result<Option<Self>, sqlx::Error> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET order_id = ?, executor_id = ?
            WHERE id = ?
            RETURNING id, order_id, executor_id
            "#,
        )
        .bind(data.order_id)
        .bind(data.executor_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(offer)
    }

    /// Deletes an offer by ID
    ///
    /// # Returns
    ///
    /// True if offer was deleted, false if offer didn't exist
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM offers WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Inserts offers with their IDs preserved, in slice order
    pub async fn insert_all(conn: &mut SqliteConnection, offers: &[Offer]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for offer in offers {
            let result = sqlx::query("INSERT INTO offers (id, order_id, executor_id) VALUES (?, ?, ?)")
                .bind(offer.id)
                .bind(offer.order_id)
                .bind(offer.executor_id)
                .execute(&mut *conn)
                .await?;

            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}
