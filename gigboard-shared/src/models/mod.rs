/// Database models for Gigboard
///
/// Each model owns one table and exposes its CRUD operations as associated
/// async functions taking the pool explicitly.
///
/// # Models
///
/// - `user`: people who post and execute orders
/// - `order`: jobs posted by customers
/// - `offer`: executors volunteering for orders
///
/// Supporting modules:
///
/// - `date`: `MM/DD/YYYY` date parsing
/// - `reference`: foreign-key to display-name resolution
///
/// # Example
///
/// ```no_run
/// use gigboard_shared::models::offer::{Offer, CreateOffer};
/// use gigboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::in_memory()).await?;
///
/// let offer = Offer::create(&pool, CreateOffer { order_id: 1, executor_id: 2 }).await?;
/// # Ok(())
/// # }
/// ```

pub mod date;
pub mod offer;
pub mod order;
pub mod reference;
pub mod user;
