//! SeaORM identity store tests against an in-memory SQLite database.

use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

use common::DatabaseConfig;
use domain::{HashCost, Identity, IdentityFactory, IdentityFactoryPort};
use identity_service_lib::infra::Database;
use identity_service_lib::repository::entities::identity;
use identity_service_lib::repository::{IdentityRepository, IdentityStore, StoreError};

async fn setup() -> (Database, IdentityStore) {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = Database::connect(&config).await.unwrap();
    let store = IdentityStore::new(db.get_connection());
    (db, store)
}

fn factory() -> IdentityFactory {
    IdentityFactory::with_cost(HashCost::new(8, 1, 1))
}

fn new_identity(email: &str) -> Identity {
    factory().new_identity(email, "12345").unwrap()
}

#[tokio::test]
async fn test_save_then_find() {
    let (_db, store) = setup().await;
    let identity = new_identity("user@mail.com");

    store.save(&identity).await.unwrap();

    let by_id = store.find_by_id(identity.id()).await.unwrap().unwrap();
    assert_eq!(by_id, identity);
    assert!(by_id.verify_password("12345"));

    let by_email = store.find_by_email("user@mail.com").await.unwrap().unwrap();
    assert_eq!(by_email.id(), identity.id());
}

#[tokio::test]
async fn test_missing_is_none() {
    let (_db, store) = setup().await;

    assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    assert!(store.find_by_email("nobody@mail.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unique_email_constraint() {
    let (_db, store) = setup().await;
    store.save(&new_identity("user@mail.com")).await.unwrap();

    let result = store.save(&new_identity("user@mail.com")).await;

    assert!(matches!(result, Err(StoreError::DuplicateEmail)));
}

#[tokio::test]
async fn test_update_overwrites_email_and_hash() {
    let (_db, store) = setup().await;
    let identity = new_identity("user@mail.com");
    store.save(&identity).await.unwrap();

    let changed = factory()
        .get_identity(&identity.id().to_string(), "changed@mail.com", "abcdef")
        .unwrap();
    store.update(&changed).await.unwrap();

    let stored = store.find_by_id(identity.id()).await.unwrap().unwrap();
    assert_eq!(stored.email(), "changed@mail.com");
    assert!(stored.verify_password("abcdef"));
    assert!(!stored.verify_password("12345"));
    assert!(store.find_by_email("user@mail.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_into_taken_email() {
    let (_db, store) = setup().await;
    let first = new_identity("first@mail.com");
    let second = new_identity("second@mail.com");
    store.save(&first).await.unwrap();
    store.save(&second).await.unwrap();

    let clash = factory()
        .get_identity(&second.id().to_string(), "first@mail.com", "12345")
        .unwrap();

    assert!(matches!(
        store.update(&clash).await,
        Err(StoreError::DuplicateEmail)
    ));
}

#[tokio::test]
async fn test_delete() {
    let (_db, store) = setup().await;
    let identity = new_identity("user@mail.com");
    store.save(&identity).await.unwrap();

    store.delete(identity.id()).await.unwrap();

    assert!(store.find_by_id(identity.id()).await.unwrap().is_none());
    // deleting again is not an error
    store.delete(identity.id()).await.unwrap();
}

#[tokio::test]
async fn test_corrupt_row_is_reported() {
    let (db, store) = setup().await;
    let id = Uuid::new_v4();
    identity::ActiveModel {
        id: Set(id),
        email: Set("user@mail.com".to_string()),
        password_hash: Set("plaintext".to_string()),
    }
    .insert(db.connection())
    .await
    .unwrap();

    assert!(matches!(
        store.find_by_id(id).await,
        Err(StoreError::Corrupt(_))
    ));
}

#[tokio::test]
async fn test_ping_and_migration_status() {
    let (db, _store) = setup().await;

    db.ping().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert_eq!(status.len(), 1);
    assert!(status[0].0.contains("create_identities_table"));
    assert!(status[0].1);
}
