//! Router-level tests: guards, redirects, and the full issue/return flow
//! driven through the HTTP surface.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use librarium::{
    models::user::RegisterForm,
    repository::Repository,
    web,
    AppState,
};

use common::test_state;

async fn test_app() -> (Repository, AppState, Router) {
    let (repository, state) = test_state().await;
    let app = web::router(state.clone());
    (repository, state, app)
}

async fn register(state: &AppState, username: &str, role: &str) {
    state
        .services
        .auth
        .register(RegisterForm {
            name: format!("{} Test", username),
            email: format!("{}@example.com", username),
            username: username.to_string(),
            password: "s3cret".to_string(),
            role: Some(role.to_string()),
        })
        .await
        .unwrap();
}

/// Log in through the router and return the session cookie pair.
async fn login_cookie(app: &Router, username: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "username={}&password=s3cret",
                    username
                )))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("librarium_session="))
        .expect("login should set the session cookie")
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

fn location<B>(response: &axum::http::Response<B>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> axum::http::Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(
    app: &Router,
    uri: &str,
    cookie: Option<&str>,
    body: &str,
) -> axum::http::Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn health_and_home_are_public() {
    let (_repository, _state, app) = test_app().await;

    assert_eq!(get(&app, "/health", None).await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/", None).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_routes_redirect_anonymous_clients_to_login() {
    let (_repository, _state, app) = test_app().await;

    for uri in ["/students", "/books", "/issue", "/dashboard"] {
        let response = get(&app, uri, None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&response), "/login", "{}", uri);
    }
}

#[tokio::test]
async fn bad_credentials_bounce_back_to_login() {
    let (_repository, state, app) = test_app().await;
    register(&state, "amina", "student").await;

    let response = post_form(&app, "/login", None, "username=amina&password=wrong").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let has_session = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("librarium_session="));
    assert!(!has_session, "failed login must not establish a session");
}

#[tokio::test]
async fn student_sessions_cannot_reach_librarian_routes() {
    let (repository, state, app) = test_app().await;
    register(&state, "ravi", "student").await;
    let cookie = login_cookie(&app, "ravi").await;

    let attempts = [
        ("/add_student", "name=Someone"),
        ("/add_book", "title=The+Bell"),
        ("/issue_book", "student_id=1&book_id=1"),
    ];
    for (uri, body) in attempts {
        let response = post_form(&app, uri, Some(&cookie), body).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(location(&response), "/", "{}", uri);
    }

    let response = get(&app, "/return_book/1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    // Nothing was written.
    for table in ["students", "books", "issue_records"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&repository.pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "{}", table);
    }
}

#[tokio::test]
async fn librarian_can_drive_the_full_issue_return_flow() {
    let (repository, state, app) = test_app().await;
    register(&state, "amina", "librarian").await;
    let cookie = login_cookie(&app, "amina").await;

    let response = post_form(
        &app,
        "/add_student",
        Some(&cookie),
        "name=Ravi&roll_no=CS-101&course=CS&contact=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/students");

    let response = post_form(&app, "/add_book", Some(&cookie), "title=The+Bell&author=Murdoch&publisher=").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/books");

    let response = post_form(&app, "/issue_book", Some(&cookie), "student_id=1&book_id=1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/issue");

    let available: bool = sqlx::query_scalar("SELECT available FROM books WHERE book_id = 1")
        .fetch_one(&repository.pool)
        .await
        .unwrap();
    assert!(!available);

    let response = get(&app, "/return_book/1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/issue");

    let available: bool = sqlx::query_scalar("SELECT available FROM books WHERE book_id = 1")
        .fetch_one(&repository.pool)
        .await
        .unwrap();
    assert!(available);

    let open: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM issue_records WHERE return_date IS NULL")
            .fetch_one(&repository.pool)
            .await
            .unwrap();
    assert_eq!(open, 0);
}

#[tokio::test]
async fn listing_pages_render_for_a_logged_in_student() {
    let (_repository, state, app) = test_app().await;
    register(&state, "ravi", "student").await;
    let cookie = login_cookie(&app, "ravi").await;

    for uri in ["/students", "/books", "/issue", "/dashboard"] {
        let response = get(&app, uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
    }
}

#[tokio::test]
async fn logout_clears_the_session() {
    let (_repository, state, app) = test_app().await;
    register(&state, "ravi", "student").await;
    let cookie = login_cookie(&app, "ravi").await;

    let response = get(&app, "/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let cleared = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with("librarium_session="));
    assert!(cleared, "logout should overwrite the session cookie");
}
