//! Folder operations through the full stack.

use vfs_core::error::ErrorKind;
use vfs_core::types::{SortDirection, SortSpec};

use crate::helpers::{base_time, file, folder, TestApp};

async fn app_with_folders() -> TestApp {
    let app = TestApp::new().await;
    app.users.register("caesar", base_time()).await.unwrap();
    app.folders.create_folder("caesar", folder("/home", 0)).await.unwrap();
    app.folders.create_folder("caesar", folder("/etc", 2)).await.unwrap();
    app.folders.create_folder("caesar", folder("/tmp", 1)).await.unwrap();
    app
}

async fn folder_names(app: &TestApp, spec: &SortSpec) -> Vec<String> {
    app.folders
        .list_folders("caesar", spec)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect()
}

#[tokio::test]
async fn test_list_folders_defaults_to_name_ascending() {
    let app = app_with_folders().await;
    let names = folder_names(&app, &SortSpec::default()).await;
    assert_eq!(names, vec!["/etc", "/home", "/tmp"]);
}

#[tokio::test]
async fn test_list_folders_by_created() {
    let app = app_with_folders().await;

    let desc = folder_names(&app, &SortSpec::created(SortDirection::Desc)).await;
    assert_eq!(desc, vec!["/etc", "/tmp", "/home"]);

    let asc = folder_names(&app, &SortSpec::created(SortDirection::Asc)).await;
    assert_eq!(asc, vec!["/home", "/tmp", "/etc"]);
}

#[tokio::test]
async fn test_create_folder_rejects_duplicate_ignoring_case() {
    let app = app_with_folders().await;

    let err = app
        .folders
        .create_folder("caesar", folder("/home", 3))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);

    let err = app
        .folders
        .create_folder("caesar", folder("/HOME", 3))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);
    assert_eq!(err.message, "The /HOME has already existed.");
}

#[tokio::test]
async fn test_delete_folder_removes_its_files() {
    let app = app_with_folders().await;
    app.files.create_file("caesar", "/home", file("dev.conf", 0)).await.unwrap();
    app.files.create_file("caesar", "/home", file("qa.conf", 1)).await.unwrap();

    app.folders.delete_folder("caesar", "/home").await.unwrap();

    let files: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM files")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(files, 0);

    // Recreating the folder starts from a clean slate.
    app.folders.create_folder("caesar", folder("/home", 4)).await.unwrap();
    let err = app
        .files
        .list_files("caesar", "/home", &SortSpec::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyResult);
    assert_eq!(err.message, "The folder is empty.");
}

#[tokio::test]
async fn test_rename_folder_rewrites_stored_folder_names() {
    let app = app_with_folders().await;
    app.files.create_file("caesar", "/home", file("dev.conf", 0)).await.unwrap();

    app.folders.rename_folder("caesar", "/home", "/opt").await.unwrap();

    let listed = app
        .files
        .list_files("caesar", "/opt", &SortSpec::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].folder_name, "/opt");

    let stored: String = sqlx::query_scalar("SELECT folder_name FROM files WHERE name = 'dev.conf'")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(stored, "/opt");

    let err = app
        .folders
        .delete_folder("caesar", "/home")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotExists);
    assert_eq!(err.message, "The /home doesn't exist.");
}

#[tokio::test]
async fn test_rename_folder_to_taken_name() {
    let app = app_with_folders().await;

    let err = app
        .folders
        .rename_folder("caesar", "/tmp", "/etc")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);

    // Both folders keep their names.
    let names = folder_names(&app, &SortSpec::default()).await;
    assert_eq!(names, vec!["/etc", "/home", "/tmp"]);
}

#[tokio::test]
async fn test_operations_for_unknown_user() {
    let app = TestApp::new().await;

    let err = app
        .folders
        .create_folder("ghost", folder("/home", 0))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotExists);
    assert_eq!(err.message, "The ghost doesn't exist.");

    let err = app
        .folders
        .list_folders("ghost", &SortSpec::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotExists);
}
