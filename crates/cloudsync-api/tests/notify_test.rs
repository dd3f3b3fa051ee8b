//! Notification endpoint integration tests.
//!
//! Run with: `cargo test -p cloudsync-api --test notify_test`

mod helpers;

use cloudsync_storage::Invocation;
use helpers::{
    setup_test_app, setup_test_app_with, test_config, RecordingRunner, TEST_COMMAND,
};

#[tokio::test]
async fn test_put_runs_copy_and_returns_ok() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/")
        .add_query_param("action", "put")
        .add_query_param("bucket", "media/")
        .add_query_param("filename", "/data/photo.jpg")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "OK");
    assert_eq!(
        app.calls(),
        vec![Invocation::new(
            TEST_COMMAND,
            ["cp", "/data/photo.jpg", "gs://media"]
        )]
    );
}

#[tokio::test]
async fn test_put_applies_bucket_prefix() {
    let app = setup_test_app_with(test_config("prod"), RecordingRunner::succeeding());

    let response = app
        .client()
        .post("/")
        .add_query_param("action", "put")
        .add_query_param("bucket", "media")
        .add_query_param("filename", "a.txt")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        app.calls(),
        vec![Invocation::new(TEST_COMMAND, ["cp", "a.txt", "gs://prod-media"])]
    );
}

#[tokio::test]
async fn test_delete_joins_bucket_and_name() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/")
        .add_query_param("action", "delete")
        .add_query_param("bucket", "b/")
        .add_query_param("filename", "/f.txt")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.text(), "OK");
    assert_eq!(
        app.calls(),
        vec![Invocation::new(TEST_COMMAND, ["rm", "gs://b/f.txt"])]
    );
}

#[tokio::test]
async fn test_missing_parameters_return_bad_request() {
    let app = setup_test_app();
    let client = app.client();

    let no_action = client
        .get("/")
        .add_query_param("bucket", "b")
        .add_query_param("filename", "f")
        .await;
    assert_eq!(no_action.status_code(), 400);
    assert_eq!(no_action.text(), "Wrong arguments");

    let no_bucket = client
        .get("/")
        .add_query_param("action", "put")
        .add_query_param("filename", "f")
        .await;
    assert_eq!(no_bucket.status_code(), 400);

    let no_filename = client
        .get("/")
        .add_query_param("action", "put")
        .add_query_param("bucket", "b")
        .await;
    assert_eq!(no_filename.status_code(), 400);

    let nothing = client.get("/").await;
    assert_eq!(nothing.status_code(), 400);
    assert_eq!(nothing.text(), "Wrong arguments");

    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_empty_parameter_returns_bad_request() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/")
        .add_query_param("action", "put")
        .add_query_param("bucket", "")
        .add_query_param("filename", "f")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Wrong arguments");
    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_action_is_rejected_without_running_command() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/")
        .add_query_param("action", "copy")
        .add_query_param("bucket", "b")
        .add_query_param("filename", "f")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Unknown action");
    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_command_failure_returns_empty_server_error() {
    let app = setup_test_app_with(test_config(""), RecordingRunner::failing());

    let response = app
        .client()
        .get("/")
        .add_query_param("action", "delete")
        .add_query_param("bucket", "b")
        .add_query_param("filename", "missing.txt")
        .await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), "");
    assert_eq!(
        app.calls(),
        vec![Invocation::new(TEST_COMMAND, ["rm", "gs://b/missing.txt"])]
    );
}

#[tokio::test]
async fn test_any_path_is_handled() {
    let app = setup_test_app();

    let response = app
        .client()
        .put("/hooks/storage")
        .add_query_param("action", "put")
        .add_query_param("bucket", "b")
        .add_query_param("filename", "f")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(app.calls().len(), 1);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app();

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");
    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_slash_only_bucket_returns_bad_request() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/")
        .add_query_param("action", "delete")
        .add_query_param("bucket", "/")
        .add_query_param("filename", "/")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Wrong arguments");
    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_invalid_utf8_query_returns_bad_request() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/?action=put&bucket=b&filename=%FF%FE")
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(response.text(), "Wrong arguments");
    assert!(app.calls().is_empty());
}

#[tokio::test]
async fn test_encoded_filename_is_decoded() {
    let app = setup_test_app();

    let response = app
        .client()
        .get("/")
        .add_query_param("action", "put")
        .add_query_param("bucket", "b")
        .add_query_param("filename", "/tmp/my file+1.txt")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(
        app.calls(),
        vec![Invocation::new(TEST_COMMAND, ["cp", "/tmp/my file+1.txt", "gs://b"])]
    );
}
