/// Database preparation before the listener starts
///
/// Opens the pool, applies migrations and loads fixtures. Fixtures are only
/// loaded into an empty database. Any failure here, including a malformed
/// fixture date, aborts startup.

use crate::config::Config;
use gigboard_shared::{
    db::{migrations::run_migrations, pool::create_pool},
    seed::{has_records, seed_database, Fixtures},
};
use sqlx::SqlitePool;
use tracing::info;

/// Creates the pool, migrates the schema and seeds it if enabled
pub async fn prepare_database(config: &Config) -> anyhow::Result<SqlitePool> {
    let pool = create_pool(config.pool_config()).await?;

    run_migrations(&pool).await?;

    if !config.seed.enabled {
        info!("Seeding disabled");
    } else if has_records(&pool).await? {
        info!("Database already holds records, skipping seed");
    } else {
        let fixtures = match &config.seed.file {
            Some(path) => {
                info!(path = %path.display(), "Loading fixtures from file");
                Fixtures::from_path(path).await?
            }
            None => Fixtures::builtin()?,
        };

        seed_database(&pool, &fixtures).await?;
    }

    Ok(pool)
}
