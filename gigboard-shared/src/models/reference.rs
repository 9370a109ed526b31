/// Foreign-key resolution for response payloads
///
/// Listing endpoints replace a stored foreign key with a readable label taken
/// from the referenced row: a user's first name, an order's name. When the
/// referenced row does not exist the raw id is kept, so a payload field is
/// either a JSON string or a JSON integer.
///
/// # Example
///
/// ```no_run
/// use gigboard_shared::models::{reference::{resolve, Reference}, user::User};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// match resolve::<User>(&pool, 5).await? {
///     Reference::Name(name) => println!("user 5 is {}", name),
///     Reference::Id(id) => println!("no user {}", id),
/// }
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use serde::Serialize;
use sqlx::SqlitePool;

/// A foreign key after resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reference {
    /// The referenced row exists; its display name
    Name(String),

    /// The referenced row is missing; the stored id
    Id(i64),
}

/// A table whose rows can stand in for their id in a payload
#[async_trait]
pub trait DisplayName {
    /// Table name, used in log fields
    const TABLE: &'static str;

    /// Looks up the display name of the row with `id`, if it exists
    async fn display_name(pool: &SqlitePool, id: i64) -> Result<Option<String>, sqlx::Error>;
}

/// Resolves `id` against the table of `T`
///
/// The existence check and the label come from the same table.
///
/// # Errors
///
/// Returns an error if the lookup query fails
pub async fn resolve<T: DisplayName>(pool: &SqlitePool, id: i64) -> Result<Reference, sqlx::Error> {
    let reference = match T::display_name(pool, id).await? {
        Some(name) => Reference::Name(name),
        None => {
            tracing::debug!(table = T::TABLE, id, "Dangling reference kept as raw id");
            Reference::Id(id)
        }
    };

    Ok(reference)
}
