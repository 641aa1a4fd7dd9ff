//! File operations through the full stack.

use vfs_core::error::ErrorKind;
use vfs_core::types::{SortDirection, SortSpec};

use crate::helpers::{base_time, file, folder, TestApp};

async fn app_with_files() -> TestApp {
    let app = TestApp::new().await;
    app.users.register("caesar", base_time()).await.unwrap();
    app.folders.create_folder("caesar", folder("/home", 0)).await.unwrap();
    app.files.create_file("caesar", "/home", file("dev.conf", 0)).await.unwrap();
    app.files.create_file("caesar", "/home", file("prod.conf", 2)).await.unwrap();
    app.files.create_file("caesar", "/home", file("qa.conf", 1)).await.unwrap();
    app
}

async fn file_names(app: &TestApp, spec: &SortSpec) -> Vec<String> {
    app.files
        .list_files("caesar", "/home", spec)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect()
}

#[tokio::test]
async fn test_list_files_defaults_to_name_ascending() {
    let app = app_with_files().await;
    let names = file_names(&app, &SortSpec::default()).await;
    assert_eq!(names, vec!["dev.conf", "prod.conf", "qa.conf"]);
}

#[tokio::test]
async fn test_list_files_by_name_descending() {
    let app = app_with_files().await;
    let names = file_names(&app, &SortSpec::name(SortDirection::Desc)).await;
    assert_eq!(names, vec!["qa.conf", "prod.conf", "dev.conf"]);
}

#[tokio::test]
async fn test_list_files_by_created_ascending() {
    let app = app_with_files().await;
    let names = file_names(&app, &SortSpec::created(SortDirection::Asc)).await;
    assert_eq!(names, vec!["dev.conf", "qa.conf", "prod.conf"]);
}

#[tokio::test]
async fn test_create_file_rejects_duplicate_ignoring_case() {
    let app = app_with_files().await;

    let err = app
        .files
        .create_file("caesar", "/home", file("DEV.CONF", 3))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::AlreadyExists);
    assert_eq!(err.message, "The DEV.CONF has already existed.");

    let names = file_names(&app, &SortSpec::default()).await;
    assert_eq!(names.len(), 3);
}

#[tokio::test]
async fn test_create_file_rejects_invalid_name() {
    let app = app_with_files().await;

    let err = app
        .files
        .create_file("caesar", "/home", file("bad/file", 3))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidName);
    assert_eq!(err.message, "The bad/file contain invalid chars.");
}

#[tokio::test]
async fn test_files_can_live_in_the_root_folder() {
    let app = TestApp::new().await;
    app.users.register("caesar", base_time()).await.unwrap();
    app.files.create_file("caesar", "/", file("notes.txt", 0)).await.unwrap();

    let listed = app
        .files
        .list_files("caesar", "/", &SortSpec::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].folder_name, "/");
}

#[tokio::test]
async fn test_delete_file() {
    let app = app_with_files().await;
    app.files.delete_file("caesar", "/home", "qa.conf").await.unwrap();

    let err = app
        .files
        .delete_file("caesar", "/home", "qa.conf")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotExists);
    assert_eq!(err.message, "The qa.conf doesn't exist.");

    let names = file_names(&app, &SortSpec::default()).await;
    assert_eq!(names, vec!["dev.conf", "prod.conf"]);
}

#[tokio::test]
async fn test_list_files_in_missing_folder() {
    let app = app_with_files().await;

    let err = app
        .files
        .list_files("caesar", "/var", &SortSpec::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotExists);
    assert_eq!(err.message, "The /var doesn't exist.");
}
