/// Order model and database operations
///
/// An order is a job a customer posts: what needs doing, where, when and for
/// how much. `customer_id` and `executor_id` point at users but are not checked
/// against the `users` table.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE orders (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name VARCHAR(50) NOT NULL,
///     description VARCHAR(300) NOT NULL,
///     start_date DATE NOT NULL,
///     end_date DATE NOT NULL,
///     address VARCHAR(50) NOT NULL UNIQUE,
///     price INTEGER NOT NULL,
///     customer_id INTEGER NOT NULL REFERENCES users (id),
///     executor_id INTEGER NOT NULL REFERENCES users (id)
/// );
/// ```

use crate::models::reference::DisplayName;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

/// Order model representing a single `orders` row
///
/// Serializes with ISO dates and raw foreign-key ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    /// Auto-assigned order ID
    pub id: i64,

    /// Short title; used as the order's label in offer payloads
    pub name: String,

    pub description: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    /// Street address, unique across all orders
    pub address: String,

    pub price: i64,

    /// User who posted the order
    pub customer_id: i64,

    /// User assigned to carry it out
    pub executor_id: i64,
}

/// Input for creating a new order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrder {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

/// Input for replacing an existing order
///
/// The customer of an order is fixed at creation, so `customer_id` is not
/// part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOrder {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub address: String,
    pub price: i64,
    pub executor_id: i64,
}

impl Order {
    /// Creates a new order in the database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Address already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateOrder) -> Result<Self, sqlx::Error> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (name, description, start_date, end_date, address, price,
                                customer_id, executor_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, description, start_date, end_date, address, price,
                      customer_id, executor_id
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.address)
        .bind(data.price)
        .bind(data.customer_id)
        .bind(data.executor_id)
        .fetch_one(pool)
        .await?;

        Ok(order)
    }

    /// Finds an order by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, name, description, start_date, end_date, address, price,
                   customer_id, executor_id
            FROM orders
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(order)
    }

    /// Lists all orders in insertion order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, name, description, start_date, end_date, address, price,
                   customer_id, executor_id
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(orders)
    }

    /// Replaces every updatable field of an existing order
    ///
    /// # Returns
    ///
    /// The updated order if found, None if the order doesn't exist
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateOrder,
    ) -> Result<Option<Self>, sqlx::Error> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET name = ?, description = ?, start_date = ?, end_date = ?, address = ?,
                price = ?, executor_id = ?
            WHERE id = ?
            RETURNING id, name, description, start_date, end_date, address, price,
                      customer_id, executor_id
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.address)
        .bind(data.price)
        .bind(data.executor_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(order)
    }

    /// Deletes an order by ID
    ///
    /// # Returns
    ///
    /// True if order was deleted, false if order didn't exist
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Inserts orders with their IDs preserved, in slice order
    pub async fn insert_all(conn: &mut SqliteConnection, orders: &[Order]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for order in orders {
            let result = sqlx::query(
                r#"
                INSERT INTO orders (id, name, description, start_date, end_date, address, price,
                                    customer_id, executor_id)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(order.id)
            .bind(&order.name)
            .bind(&order.description)
            .bind(order.start_date)
            .bind(order.end_date)
            .bind(&order.address)
            .bind(order.price)
            .bind(order.customer_id)
            .bind(order.executor_id)
            .execute(&mut *conn)
            .await?;

            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}

#[async_trait]
impl DisplayName for Order {
    const TABLE: &'static str = "orders";

    async fn display_name(pool: &SqlitePool, id: i64) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT name FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serializes_iso_dates() {
        let order = Order {
            id: 1,
            name: "Walk the dog".to_string(),
            description: "Two walks a day".to_string(),
            start_date: NaiveDate::from_ymd_opt(2013, 2, 8).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2013, 2, 15).unwrap(),
            address: "4759 William Haven".to_string(),
            price: 5512,
            customer_id: 1,
            executor_id: 2,
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["start_date"], "2013-02-08");
        assert_eq!(value["end_date"], "2013-02-15");
        assert_eq!(value["customer_id"], 1);
    }
}
