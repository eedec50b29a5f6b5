//! End-to-end tests for the bootstrap seeding pipeline over a mocked
//! store: configuration seeding followed by user seeding, the way the
//! orchestrator runs them between migrations.

use chrono::Utc;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use uuid::Uuid;

use coffeeshop_lib::entity;
use coffeeshop_lib::models::SeedData;
use coffeeshop_lib::services::seed::{seed_configuration, seed_users};

fn exec_ok() -> MockExecResult {
    MockExecResult {
        rows_affected: 1,
        ..Default::default()
    }
}

/// A store with nothing in it: every probe is empty, every insert works.
fn empty_store() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::client::Model>::new()])
        .append_query_results([Vec::<entity::identity_resource::Model>::new()])
        .append_query_results([Vec::<entity::api_scope::Model>::new()])
        .append_query_results([Vec::<entity::api_resource::Model>::new()])
        .append_query_results([Vec::<entity::user::Model>::new()])
        // clients, identity resources, api scopes, api resources,
        // api resource scope refs, user, user claims
        .append_exec_results([
            exec_ok(),
            exec_ok(),
            exec_ok(),
            exec_ok(),
            exec_ok(),
            exec_ok(),
            exec_ok(),
        ])
        .into_connection()
}

/// A store that has already been seeded once.
fn populated_store() -> DatabaseConnection {
    let now = Utc::now();
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![entity::client::Model {
            id: Uuid::new_v4(),
            client_id: "m2m.client".to_string(),
            client_name: "Machine to machine client".to_string(),
            secret_hash: Some("ab".repeat(32)),
            allowed_grant_types: "client_credentials".to_string(),
            allowed_scopes: "coffeeshop_api".to_string(),
            redirect_uris: String::new(),
            created_at: now,
        }]])
        .append_query_results([vec![entity::identity_resource::Model {
            id: Uuid::new_v4(),
            name: "openid".to_string(),
            display_name: "Your user identifier".to_string(),
            user_claims: "sub".to_string(),
            created_at: now,
        }]])
        .append_query_results([vec![entity::api_scope::Model {
            id: Uuid::new_v4(),
            name: "coffeeshop_api".to_string(),
            display_name: "Coffee Shop API".to_string(),
            created_at: now,
        }]])
        .append_query_results([vec![entity::api_resource::Model {
            id: Uuid::new_v4(),
            name: "coffeeshop".to_string(),
            display_name: "Coffee Shop".to_string(),
            created_at: now,
        }]])
        .append_query_results([vec![entity::user::Model {
            id: Uuid::new_v4(),
            username: "victoria".to_string(),
            email: "victoria.secret@keymail.com".to_string(),
            email_confirmed: true,
            password_hash: "$argon2id$stored".to_string(),
            created_at: now,
            updated_at: now,
        }]])
        .into_connection()
}

async fn run_pipeline(db: &DatabaseConnection, seed: &SeedData) {
    seed_configuration(db, seed).await.unwrap();
    seed_users(db, &seed.demo_user).await.unwrap();
}

#[tokio::test]
async fn seeding_an_empty_store_writes_every_kind_in_order() {
    let db = empty_store();
    run_pipeline(&db, &SeedData::builtin()).await;

    let log = format!("{:?}", db.into_transaction_log());

    let positions: Vec<usize> = [
        r#"INSERT INTO "clients""#,
        r#"INSERT INTO "identity_resources""#,
        r#"INSERT INTO "api_scopes""#,
        r#"INSERT INTO "api_resources""#,
        r#"INSERT INTO "users""#,
        r#"INSERT INTO "user_claims""#,
    ]
    .iter()
    .map(|needle| log.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(
        positions, sorted,
        "kinds must be written clients -> identity resources -> scopes -> resources -> user -> claims"
    );
}

#[tokio::test]
async fn seeded_user_gets_exactly_the_configured_claims() {
    let db = empty_store();
    run_pipeline(&db, &SeedData::builtin()).await;

    let log = format!("{:?}", db.into_transaction_log());

    // One user insert, one claim batch.
    assert_eq!(log.matches(r#"INSERT INTO "users""#).count(), 1);
    assert_eq!(log.matches(r#"INSERT INTO "user_claims""#).count(), 1);

    for expected in [
        "Victoria Secret",
        "Victoria",
        "Secret",
        "http://victoriasecret.com",
        "somewhere",
    ] {
        assert!(log.contains(expected), "claim value '{}' missing", expected);
    }
    assert!(log.contains("victoria.secret@keymail.com"));
}

#[tokio::test]
async fn rerunning_against_a_seeded_store_inserts_nothing() {
    let db = populated_store();
    run_pipeline(&db, &SeedData::builtin()).await;

    let log = format!("{:?}", db.into_transaction_log());
    assert!(
        !log.contains("INSERT INTO"),
        "a second run must be a pure no-op"
    );
}

#[tokio::test]
async fn a_custom_seed_set_flows_through_the_pipeline() {
    let seed_json = r#"{
        "clients": [{
            "client_id": "kiosk",
            "client_name": "Store kiosk",
            "secret": "kiosk-secret",
            "allowed_grant_types": ["client_credentials"],
            "allowed_scopes": ["orders_api"]
        }],
        "identity_resources": [],
        "api_scopes": [{"name": "orders_api", "display_name": "Orders API"}],
        "api_resources": [{"name": "orders", "display_name": "Orders", "scopes": ["orders_api"]}],
        "demo_user": {
            "username": "barista",
            "email": "barista@example.com",
            "password": "Brew1234$"
        }
    }"#;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, seed_json.as_bytes()).unwrap();
    let seed = SeedData::from_file(file.path()).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::client::Model>::new()])
        .append_query_results([Vec::<entity::identity_resource::Model>::new()])
        .append_query_results([Vec::<entity::api_scope::Model>::new()])
        .append_query_results([Vec::<entity::api_resource::Model>::new()])
        .append_query_results([Vec::<entity::user::Model>::new()])
        // clients, api scopes, api resources, scope refs, user (no
        // identity resources and no claims in this set)
        .append_exec_results([exec_ok(), exec_ok(), exec_ok(), exec_ok(), exec_ok()])
        .into_connection();

    run_pipeline(&db, &seed).await;

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("kiosk"));
    assert!(log.contains("orders_api"));
    assert!(log.contains("barista"));
    assert!(
        !log.contains(r#"INSERT INTO "identity_resources""#),
        "an empty kind in the seed set writes nothing"
    );
}
