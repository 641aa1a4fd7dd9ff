//! Registration through the full stack.

use vfs_core::error::ErrorKind;
use vfs_core::types::SortSpec;

use crate::helpers::{base_time, TestApp};

#[tokio::test]
async fn test_register_creates_a_usable_file_system() {
    let app = TestApp::new().await;
    app.users.register("ada", base_time()).await.unwrap();

    // The file system exists but holds nothing yet.
    let err = app
        .folders
        .list_folders("ada", &SortSpec::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyResult);
    assert_eq!(err.message, "Warning: The ada doesn't have any folders.");
}

#[tokio::test]
async fn test_register_rejects_duplicate_username() {
    let app = TestApp::new().await;
    app.users.register("ada", base_time()).await.unwrap();

    let err = app.users.register("ada", base_time()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);
    assert_eq!(err.message, "The ada has already existed.");
}

#[tokio::test]
async fn test_register_rejects_invalid_username() {
    let app = TestApp::new().await;

    let err = app.users.register("bad!name", base_time()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidName);
    assert_eq!(err.message, "The bad!name contain invalid chars.");
}

#[tokio::test]
async fn test_registration_is_stored() {
    let app = TestApp::new().await;
    app.users.register("ada", base_time()).await.unwrap();

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(users, 1);

    // Provisioning also created the root folder row.
    let roots: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders WHERE parent_id IS NULL")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(roots, 1);
}
