/// Integration tests for the user, order and offer models
///
/// Every test runs against its own migrated in-memory SQLite database.

use chrono::NaiveDate;
use gigboard_shared::db::migrations::run_migrations;
use gigboard_shared::db::pool::{create_pool, DatabaseConfig};
use gigboard_shared::models::offer::{CreateOffer, Offer, UpdateOffer};
use gigboard_shared::models::order::{CreateOrder, Order, UpdateOrder};
use gigboard_shared::models::reference::{resolve, Reference};
use gigboard_shared::models::user::{CreateUser, UpdateUser, User};
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = create_pool(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations failed");
    pool
}

fn new_user(first_name: &str, email: &str) -> CreateUser {
    CreateUser {
        first_name: first_name.to_string(),
        last_name: "Tester".to_string(),
        age: 30,
        email: email.to_string(),
        role: "customer".to_string(),
        phone: "5550100".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_order(name: &str, address: &str, customer_id: i64, executor_id: i64) -> CreateOrder {
    CreateOrder {
        name: name.to_string(),
        description: "Some work".to_string(),
        start_date: date(2024, 3, 1),
        end_date: date(2024, 3, 4),
        address: address.to_string(),
        price: 1200,
        customer_id,
        executor_id,
    }
}

#[tokio::test]
async fn test_user_create_and_find() {
    let pool = test_pool().await;

    let created = User::create(&pool, new_user("Ana", "ana@example.com")).await.unwrap();
    assert_eq!(created.id, 1);

    let found = User::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.first_name, "Ana");
    assert_eq!(found.email, "ana@example.com");
}

#[tokio::test]
async fn test_user_missing_id_is_none() {
    let pool = test_pool().await;

    assert!(User::find_by_id(&pool, 42).await.unwrap().is_none());
    assert!(User::update(
        &pool,
        42,
        UpdateUser {
            first_name: "X".to_string(),
            last_name: "Y".to_string(),
            age: 1,
            email: "x@example.com".to_string(),
            role: "r".to_string(),
            phone: "p".to_string(),
        },
    )
    .await
    .unwrap()
    .is_none());
    assert!(!User::delete(&pool, 42).await.unwrap());
}

#[tokio::test]
async fn test_user_list_in_insertion_order() {
    let pool = test_pool().await;

    for (name, email) in [("Zoe", "zoe@example.com"), ("Adam", "adam@example.com"), ("Mia", "mia@example.com")] {
        User::create(&pool, new_user(name, email)).await.unwrap();
    }

    let names: Vec<String> = User::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.first_name)
        .collect();
    assert_eq!(names, vec!["Zoe", "Adam", "Mia"]);
}

#[tokio::test]
async fn test_user_update_replaces_every_field() {
    let pool = test_pool().await;
    let user = User::create(&pool, new_user("Ana", "ana@example.com")).await.unwrap();

    let update = UpdateUser {
        first_name: "Anna".to_string(),
        last_name: "Silva".to_string(),
        age: 28,
        email: "anna.silva@example.com".to_string(),
        role: "executor".to_string(),
        phone: "5550199".to_string(),
    };
    User::update(&pool, user.id, update.clone()).await.unwrap().unwrap();

    let found = User::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(found.first_name, update.first_name);
    assert_eq!(found.last_name, update.last_name);
    assert_eq!(found.age, update.age);
    assert_eq!(found.email, update.email);
    assert_eq!(found.role, update.role);
    assert_eq!(found.phone, update.phone);
}

#[tokio::test]
async fn test_user_duplicate_email_is_unique_violation() {
    let pool = test_pool().await;
    User::create(&pool, new_user("Ana", "same@example.com")).await.unwrap();

    let err = User::create(&pool, new_user("Bea", "same@example.com"))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected database error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_user_delete_twice() {
    let pool = test_pool().await;
    let user = User::create(&pool, new_user("Ana", "ana@example.com")).await.unwrap();

    assert!(User::delete(&pool, user.id).await.unwrap());
    assert!(!User::delete(&pool, user.id).await.unwrap());
}

#[tokio::test]
async fn test_order_accepts_dangling_user_ids() {
    let pool = test_pool().await;

    let order = Order::create(&pool, new_order("Paint", "1 Elm St", 77, 88)).await.unwrap();
    assert_eq!(order.customer_id, 77);
    assert_eq!(order.executor_id, 88);

    let found = Order::find_by_id(&pool, order.id).await.unwrap().unwrap();
    assert_eq!(found.start_date, date(2024, 3, 1));
    assert_eq!(found.end_date, date(2024, 3, 4));
}

#[tokio::test]
async fn test_order_update_keeps_customer() {
    let pool = test_pool().await;
    let order = Order::create(&pool, new_order("Paint", "1 Elm St", 1, 2)).await.unwrap();

    let updated = Order::update(
        &pool,
        order.id,
        UpdateOrder {
            name: "Paint twice".to_string(),
            description: "Two coats".to_string(),
            start_date: date(2024, 4, 1),
            end_date: date(2024, 4, 2),
            address: "2 Elm St".to_string(),
            price: 1500,
            executor_id: 3,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Paint twice");
    assert_eq!(updated.address, "2 Elm St");
    assert_eq!(updated.start_date, date(2024, 4, 1));
    assert_eq!(updated.price, 1500);
    assert_eq!(updated.executor_id, 3);
    assert_eq!(updated.customer_id, 1);
}

#[tokio::test]
async fn test_order_duplicate_address_is_unique_violation() {
    let pool = test_pool().await;
    Order::create(&pool, new_order("Paint", "1 Elm St", 1, 2)).await.unwrap();

    let err = Order::create(&pool, new_order("Mow", "1 Elm St", 1, 2))
        .await
        .unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(ref e) if e.is_unique_violation()));
}

#[tokio::test]
async fn test_offer_crud() {
    let pool = test_pool().await;

    let offer = Offer::create(&pool, CreateOffer { order_id: 1, executor_id: 2 }).await.unwrap();
    assert_eq!(Offer::list(&pool).await.unwrap(), vec![offer]);

    let updated = Offer::update(&pool, offer.id, UpdateOffer { order_id: 5, executor_id: 6 })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.order_id, 5);
    assert_eq!(updated.executor_id, 6);

    assert!(Offer::delete(&pool, offer.id).await.unwrap());
    assert!(Offer::find_by_id(&pool, offer.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_resolve_user_name_or_id() {
    let pool = test_pool().await;
    let user = User::create(&pool, new_user("Ana", "ana@example.com")).await.unwrap();

    assert_eq!(
        resolve::<User>(&pool, user.id).await.unwrap(),
        Reference::Name("Ana".to_string())
    );
    assert_eq!(resolve::<User>(&pool, 5).await.unwrap(), Reference::Id(5));
}

#[tokio::test]
async fn test_resolve_order_checks_orders_table() {
    let pool = test_pool().await;

    // Users 1..=7 exist, no orders do
    for i in 1..=7 {
        User::create(&pool, new_user("U", &format!("u{}@example.com", i))).await.unwrap();
    }
    assert_eq!(resolve::<Order>(&pool, 7).await.unwrap(), Reference::Id(7));

    let order = Order::create(&pool, new_order("Paint", "1 Elm St", 1, 2)).await.unwrap();
    assert_eq!(
        resolve::<Order>(&pool, order.id).await.unwrap(),
        Reference::Name("Paint".to_string())
    );
}
