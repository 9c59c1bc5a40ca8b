//! HTTP tests driving the full router against an in-memory database.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


/// Builds the application over a fresh database with every catalog table.
///
/// The context is returned alongside the router so tests can arrange rows.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let app = router::app(AppState::new(test.db.clone().unwrap()));

    (test, app)
}

fn db(test: &TestContext) -> &DatabaseConnection {
    test.db.as_ref().unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
    let request = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts the error body shape and that `status_code` mirrors the status line.
async fn assert_error(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);

    let json = body_json(response).await;
    assert_eq!(json["message"], message);
    assert_eq!(json["status_code"], status.as_u16());
}
