/// Startup fixture loader
///
/// Fills an empty database with a fixed set of users, orders and offers before
/// the API starts accepting requests. Records keep the ids given in the
/// fixture document and are inserted in document order, one transaction per
/// table.
///
/// # Fixture Format
///
/// ```json
/// {
///   "users":  [{"id": 1, "first_name": "...", "last_name": "...", "age": 31,
///               "email": "...", "role": "...", "phone": "..."}],
///   "orders": [{"id": 1, "name": "...", "description": "...",
///               "start_date": "02/08/2013", "end_date": "02/15/2013",
///               "address": "...", "price": 5512, "customer_id": 1, "executor_id": 2}],
///   "offers": [{"id": 1, "order_id": 1, "executor_id": 2}]
/// }
/// ```
///
/// # Example
///
/// ```no_run
/// use gigboard_shared::db::{migrations::run_migrations, pool::{create_pool, DatabaseConfig}};
/// use gigboard_shared::seed::{seed_database, Fixtures};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::in_memory()).await?;
/// run_migrations(&pool).await?;
///
/// let summary = seed_database(&pool, &Fixtures::builtin()?).await?;
/// println!("Seeded {} users", summary.users);
/// # Ok(())
/// # }
/// ```

use crate::models::{
    date::{parse_date, DateError},
    offer::Offer,
    order::Order,
    user::User,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Fixture document compiled into the crate
pub const BUILTIN_FIXTURES: &str = include_str!("../fixtures/seed.json");

/// Seed loading errors
///
/// All of them abort startup.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Fixture file could not be read
    #[error("Failed to read fixture file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture document is not valid JSON or misses a field
    #[error("Malformed fixture document: {0}")]
    Parse(#[from] serde_json::Error),

    /// An order date is not `MM/DD/YYYY`
    #[error("Order {order_id} has an invalid {field}: {source}")]
    InvalidDate {
        order_id: i64,
        field: &'static str,
        #[source]
        source: DateError,
    },

    /// Insert failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Order as written in a fixture document, with unparsed dates
#[derive(Debug, Clone, Deserialize)]
pub struct OrderFixture {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl OrderFixture {
    fn into_order(self) -> Result<Order, SeedError> {
        let start_date = parse_date(&self.start_date).map_err(|source| SeedError::InvalidDate {
            order_id: self.id,
            field: "start_date",
            source,
        })?;
        let end_date = parse_date(&self.end_date).map_err(|source| SeedError::InvalidDate {
            order_id: self.id,
            field: "end_date",
            source,
        })?;

        Ok(Order {
            id: self.id,
            name: self.name,
            description: self.description,
            start_date,
            end_date,
            address: self.address,
            price: self.price,
            customer_id: self.customer_id,
            executor_id: self.executor_id,
        })
    }
}

/// The three fixture lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub orders: Vec<OrderFixture>,

    #[serde(default)]
    pub offers: Vec<Offer>,
}

impl Fixtures {
    /// Parses a fixture document
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The fixture set shipped with the crate
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_FIXTURES)
    }

    /// Reads and parses a fixture document from disk
    pub async fn from_path(path: &Path) -> Result<Self, SeedError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&json)
    }
}

/// Row counts inserted by `seed_database`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: u64,
    pub orders: u64,
    pub offers: u64,
}

/// Whether any of the seeded tables already holds a row
///
/// A file database keeps its rows between runs, so startup checks this
/// before loading fixtures a second time.
pub async fn has_records(pool: &SqlitePool) -> Result<bool, SeedError> {
    let populated: i64 = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM users) OR EXISTS(SELECT 1 FROM orders) OR EXISTS(SELECT 1 FROM offers)",
    )
    .fetch_one(pool)
    .await?;

    Ok(populated != 0)
}

/// Inserts the fixtures into an empty, migrated database
///
/// Order dates are parsed before anything is written, so a bad date leaves
/// the database untouched.
///
/// # Errors
///
/// Returns `SeedError::InvalidDate` for a malformed order date, or
/// `SeedError::Database` if an insert fails (for example on a duplicate id or
/// email).
pub async fn seed_database(pool: &SqlitePool, fixtures: &Fixtures) -> Result<SeedSummary, SeedError> {
    let orders = fixtures
        .orders
        .iter()
        .cloned()
        .map(OrderFixture::into_order)
        .collect::<Result<Vec<_>, _>>()?;

    let mut summary = SeedSummary::default();

    let mut tx = pool.begin().await?;
    summary.users = User::insert_all(&mut tx, &fixtures.users).await?;
    tx.commit().await?;
    debug!(count = summary.users, "Seeded users");

    let mut tx = pool.begin().await?;
    summary.orders = Order::insert_all(&mut tx, &orders).await?;
    tx.commit().await?;
    debug!(count = summary.orders, "Seeded orders");

    let mut tx = pool.begin().await?;
    summary.offers = Offer::insert_all(&mut tx, &fixtures.offers).await?;
    tx.commit().await?;
    debug!(count = summary.offers, "Seeded offers");

    info!(
        users = summary.users,
        orders = summary.orders,
        offers = summary.offers,
        "Seed data loaded"
    );

    Ok(summary)
}
