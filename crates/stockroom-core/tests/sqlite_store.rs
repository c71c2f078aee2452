use std::num::NonZeroU32;

use stockroom_core::auth::{Role, Session};
use stockroom_core::store::types::NewUser;
use stockroom_core::store::{MovementKind, SqliteStore};
use stockroom_core::StockroomError;

fn qty(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).expect("test quantity must be nonzero")
}

#[test]
fn test_tools_hammer_scenario() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");

    let category_id = store.add_category("Tools").expect("category should insert");
    let product_id = store
        .add_product("Hammer", category_id)
        .expect("product should insert");

    let product = store
        .get_product(product_id)
        .expect("query should succeed")
        .expect("product should exist");
    assert_eq!(product.quantity, 0);

    let receipt = store
        .adjust_stock(product_id, qty(10), MovementKind::Entry)
        .expect("entry should succeed");
    assert_eq!(receipt.new_quantity, 10);
    assert_eq!(receipt.quantity, 10);
    assert_eq!(receipt.kind, MovementKind::Entry);

    let history = store.list_history().expect("history should list");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].product, "Hammer");
    assert_eq!(history[0].quantity, 10);
    assert_eq!(history[0].kind, MovementKind::Entry);

    let receipt = store
        .adjust_stock(product_id, qty(3), MovementKind::Exit)
        .expect("exit should succeed");
    assert_eq!(receipt.new_quantity, 7);

    let product = store
        .get_product(product_id)
        .expect("query should succeed")
        .expect("product should exist");
    assert_eq!(product.quantity, 7);

    // Newest first: the exit leads.
    let history = store.list_history().expect("history should list");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, MovementKind::Exit);
    assert_eq!(history[0].quantity, 3);
    assert_eq!(history[1].kind, MovementKind::Entry);
}

#[test]
fn test_exit_may_drive_quantity_negative() {
    // No floor on stock; exits below zero track backorders.
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");
    let category_id = store.add_category("Tools").expect("category should insert");
    let product_id = store
        .add_product("Hammer", category_id)
        .expect("product should insert");

    let receipt = store
        .adjust_stock(product_id, qty(4), MovementKind::Exit)
        .expect("exit should succeed");
    assert_eq!(receipt.new_quantity, -4);
}

#[test]
fn test_duplicate_category_leaves_table_unchanged() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");
    store.add_category("Tools").expect("category should insert");

    let result = store.add_category("Tools");
    assert!(matches!(result, Err(StockroomError::DuplicateName(_))));

    let categories = store.list_categories().expect("categories should list");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Tools");
}

#[test]
fn test_product_with_dangling_category_inserts_nothing() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");

    let result = store.add_product("Hammer", 7);
    assert!(matches!(result, Err(StockroomError::ForeignKey(_))));
    assert!(store.list_products().expect("products should list").is_empty());
}

#[test]
fn test_name_validation() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");

    assert!(matches!(
        store.add_category("   "),
        Err(StockroomError::Validation(_))
    ));
    assert!(matches!(
        store.add_category(&"x".repeat(33)),
        Err(StockroomError::Validation(_))
    ));
}

#[test]
fn test_bootstrap_admin_runs_once() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");
    assert!(!store.has_users().expect("count should succeed"));

    let created = store
        .bootstrap_admin("alice", "alice@example.com", "first-admin-pw")
        .expect("bootstrap should succeed");
    assert!(created.is_some());

    let users = store.list_users().expect("users should list");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].role, Role::Admin);
    assert_eq!(users[0].email, "alice@example.com");

    // Second call is a no-op even with different credentials.
    let created = store
        .bootstrap_admin("mallory", "mallory@example.com", "second-admin-pw")
        .expect("bootstrap should succeed");
    assert!(created.is_none());
    assert_eq!(store.list_users().expect("users should list").len(), 1);
}

#[test]
fn test_login_fails_closed_and_leaks_nothing() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");
    store
        .create_user(&NewUser::new(
            "alice",
            "alice@example.com",
            "correct-password",
            Role::Manager,
        ))
        .expect("user should insert");

    let good = store
        .verify_login("alice@example.com", "correct-password")
        .expect("login should succeed");
    assert_eq!(good.expect("user should verify").username, "alice");

    // Wrong password and unknown email are indistinguishable: both Ok(None).
    let wrong_password = store
        .verify_login("alice@example.com", "wrong-password")
        .expect("lookup should succeed");
    let unknown_email = store
        .verify_login("nobody@example.com", "correct-password")
        .expect("lookup should succeed");
    assert!(wrong_password.is_none());
    assert!(unknown_email.is_none());
}

#[test]
fn test_email_case_is_normalized_across_entry_paths() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");
    store
        .create_user(&NewUser::new(
            "bob",
            "Bob@Example.com",
            "correct-password",
            Role::Manager,
        ))
        .expect("user should insert");

    // Stored lowercase, and any casing of the email logs in.
    let users = store.list_users().expect("users should list");
    assert_eq!(users[0].email, "bob@example.com");

    for email in ["bob@example.com", "Bob@Example.com", "BOB@EXAMPLE.COM"] {
        let user = store
            .verify_login(email, "correct-password")
            .expect("lookup should succeed");
        assert!(user.is_some(), "login should succeed for {}", email);
    }

    // Case-variant duplicates collide on the normalized form.
    let duplicate = store.create_user(&NewUser::new(
        "robert",
        "BOB@example.com",
        "another-password",
        Role::Observer,
    ));
    assert!(matches!(
        duplicate,
        Err(StockroomError::DuplicateEmail(email)) if email == "bob@example.com"
    ));
}

#[test]
fn test_create_user_validates_input() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");

    let bad_email = store.create_user(&NewUser::new(
        "alice",
        "not-an-email",
        "long-enough-pw",
        Role::Observer,
    ));
    assert!(matches!(bad_email, Err(StockroomError::Validation(_))));

    let short_password = store.create_user(&NewUser::new(
        "alice",
        "alice@example.com",
        "short",
        Role::Observer,
    ));
    assert!(matches!(short_password, Err(StockroomError::Validation(_))));

    assert!(!store.has_users().expect("count should succeed"));
}

#[test]
fn test_list_users_ordered_by_role_then_username() {
    let mut store = SqliteStore::open_in_memory().expect("open should succeed");
    for (name, email, role) in [
        ("zoe", "zoe@example.com", Role::Observer),
        ("bob", "bob@example.com", Role::Manager),
        ("ann", "ann@example.com", Role::Admin),
        ("amy", "amy@example.com", Role::Manager),
    ] {
        store
            .create_user(&NewUser::new(name, email, "long-enough-pw", role))
            .expect("user should insert");
    }

    let names: Vec<String> = store
        .list_users()
        .expect("users should list")
        .into_iter()
        .map(|user| user.username)
        .collect();
    assert_eq!(names, ["ann", "amy", "bob", "zoe"]);
}

#[test]
fn test_session_gates_operations_against_store() {
    use stockroom_core::auth::Operation;

    let mut store = SqliteStore::open_in_memory().expect("open should succeed");
    store
        .create_user(&NewUser::new(
            "olive",
            "olive@example.com",
            "observer-pw-123",
            Role::Observer,
        ))
        .expect("user should insert");

    let user = store
        .verify_login("olive@example.com", "observer-pw-123")
        .expect("login should succeed")
        .expect("user should verify");
    let session = Session::new(user);

    assert!(session.authorize(Operation::ViewCatalog).is_ok());
    assert!(matches!(
        session.authorize(Operation::AdjustStock),
        Err(StockroomError::AccessDenied)
    ));
    assert!(matches!(
        session.authorize(Operation::ViewHistory),
        Err(StockroomError::AccessDenied)
    ));
}

#[test]
fn test_schema_is_idempotent_across_reopen() {
    let dir = tempfile::tempdir().expect("tempdir should create");
    let path = dir.path().join("stockroom.db");

    {
        let mut store = SqliteStore::open(&path).expect("open should succeed");
        let category_id = store.add_category("Tools").expect("category should insert");
        store
            .add_product("Hammer", category_id)
            .expect("product should insert");
    }

    // Reopening runs the schema batch again and must not disturb data.
    let store = SqliteStore::open(&path).expect("reopen should succeed");
    let products = store.list_products().expect("products should list");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Hammer");
    assert_eq!(products[0].category, "Tools");
}
