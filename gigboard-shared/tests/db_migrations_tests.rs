/// Integration tests for database migrations
///
/// Every test runs against its own in-memory SQLite database.

use gigboard_shared::db::migrations::{get_migration_status, run_migrations};
use gigboard_shared::db::pool::{close_pool, create_pool, DatabaseConfig};

#[tokio::test]
async fn test_status_before_migrations() {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");

    let status = get_migration_status(&pool)
        .await
        .expect("Failed to get migration status");
    assert_eq!(status.applied_migrations, 0);
    assert_eq!(status.latest_version, None);

    close_pool(pool).await;
}

#[tokio::test]
async fn test_run_migrations() {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");

    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations failed: {:?}", result.err());

    let status = get_migration_status(&pool)
        .await
        .expect("Failed to get migration status");
    assert!(status.applied_migrations > 0, "No migrations were applied");
    assert!(status.latest_version.is_some());

    close_pool(pool).await;
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");

    run_migrations(&pool).await.expect("First migration run failed");
    let status_1 = get_migration_status(&pool).await.expect("Failed to get status");

    run_migrations(&pool).await.expect("Second migration run failed");
    let status_2 = get_migration_status(&pool).await.expect("Failed to get status");

    assert_eq!(
        status_1.applied_migrations, status_2.applied_migrations,
        "Migrations should be idempotent"
    );

    close_pool(pool).await;
}

#[tokio::test]
async fn test_tables_exist_after_migrations() {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations failed");

    for table in ["users", "orders", "offers"] {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .expect("Failed to query sqlite_master");

        assert!(exists, "Table {} should exist", table);
    }

    close_pool(pool).await;
}

#[tokio::test]
async fn test_file_database_is_created() {
    let path = std::env::temp_dir().join(format!("gigboard-test-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let config = DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        max_connections: 2,
        ..Default::default()
    };
    let pool = create_pool(config).await.expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations failed");
    close_pool(pool).await;

    assert!(path.exists(), "Database file should be created");
    let _ = std::fs::remove_file(&path);
}
