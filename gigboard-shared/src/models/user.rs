/// User model and database operations
///
/// Users are the people on both sides of an order: the customer who posts it
/// and the executor who carries it out. Orders and offers refer to users by id.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     first_name VARCHAR(50) NOT NULL,
///     last_name VARCHAR(50) NOT NULL,
///     age INTEGER NOT NULL,
///     email VARCHAR(50) NOT NULL UNIQUE,
///     role VARCHAR(50) NOT NULL,
///     phone VARCHAR(50) NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use gigboard_shared::models::user::{User, CreateUser};
/// use gigboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::in_memory()).await?;
///
/// let new_user = CreateUser {
///     first_name: "Ana".to_string(),
///     last_name: "Pereira".to_string(),
///     age: 27,
///     email: "ana@example.com".to_string(),
///     role: "customer".to_string(),
///     phone: "6195550143".to_string(),
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// println!("Created user: {}", user.id);
/// # Ok(())
/// # }
/// ```

use crate::models::reference::DisplayName;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

/// User model representing a single `users` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Auto-assigned user ID
    pub id: i64,

    /// Given name; used as the user's label in order and offer listings
    pub first_name: String,

    pub last_name: String,

    pub age: i64,

    /// Email address, unique across all users
    pub email: String,

    /// Free-form role such as "customer" or "executor"
    pub role: String,

    pub phone: String,
}

/// Input for creating a new user
///
/// Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Input for replacing an existing user
///
/// Updates are full replacements, so every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Returns
    ///
    /// The newly created user with its assigned ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, age, email, role, phone)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, first_name, last_name, age, email, role, phone
            "#,
        )
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.age)
        .bind(data.email)
        .bind(data.role)
        .bind(data.phone)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use gigboard_shared::models::user::User;
    /// # use sqlx::SqlitePool;
    /// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
    /// if let Some(user) = User::find_by_id(&pool, 1).await? {
    ///     println!("Found user: {}", user.email);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, age, email, role, phone
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users in insertion order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, age, email, role, phone
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Replaces every field of an existing user
    ///
    /// # Returns
    ///
    /// The updated user if found, None if the user doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Email already belongs to another user
    /// - Database connection fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, age = ?, email = ?, role = ?, phone = ?
            WHERE id = ?
            RETURNING id, first_name, last_name, age, email, role, phone
            "#,
        )
        .bind(data.first_name)
        .bind(data.last_name)
        .bind(data.age)
        .bind(data.email)
        .bind(data.role)
        .bind(data.phone)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user by ID
    ///
    /// Orders and offers that point at the user are left untouched.
    ///
    /// # Returns
    ///
    /// True if user was deleted, false if user didn't exist
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Inserts users with their IDs preserved, in slice order
    ///
    /// Used by the seed loader inside a transaction.
    pub async fn insert_all(conn: &mut SqliteConnection, users: &[User]) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;

        for user in users {
            let result = sqlx::query(
                r#"
                INSERT INTO users (id, first_name, last_name, age, email, role, phone)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(user.id)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.age)
            .bind(&user.email)
            .bind(&user.role)
            .bind(&user.phone)
            .execute(&mut *conn)
            .await?;

            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}

#[async_trait]
impl DisplayName for User {
    const TABLE: &'static str = "users";

    async fn display_name(pool: &SqlitePool, id: i64) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT first_name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
