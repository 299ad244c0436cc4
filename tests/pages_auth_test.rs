//! Integration tests for the HTML flow: login/logout, the session gate on
//! post mutation, and title search.

mod common;

use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use serde_json::{json, Value};

use scribe_service::{routes, session};

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .wrap(session::session_middleware(common::TEST_SECRET))
                .configure(routes::configure),
        )
        .await
    };
}

async fn body_text<B: actix_web::body::MessageBody>(
    resp: actix_web::dev::ServiceResponse<B>,
) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Log in with the default admin credential and return the session cookie.
async fn log_in<S, B>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/login")
            .set_form(&[("username", "admin"), ("password", "admin")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    common::session_cookie(&resp)
}

#[actix_web::test]
async fn index_on_empty_store_renders() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("No entries here so far"));
}

#[actix_web::test]
async fn delete_without_login_is_401_json() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/delete/1").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": 0, "message": "Please log in."}));
}

#[actix_web::test]
async fn add_without_login_is_401() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/add")
            .set_form(&[("title", "t"), ("text", "x")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_with_wrong_username_shows_invalid_username() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_form(&[("username", "wrong"), ("password", "admin")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Invalid username"));
    assert!(!body.contains("Invalid password"));
}

#[actix_web::test]
async fn login_with_wrong_password_shows_invalid_password() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .set_form(&[("username", "admin"), ("password", "wrong")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Invalid password"));
    assert!(!body.contains("Invalid username"));
}

#[actix_web::test]
async fn login_add_entry_and_see_it_on_index() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);
    let cookie = log_in(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/add")
            .cookie(cookie)
            .set_form(&[("title", "Hello"), ("text", "First entry")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        "/"
    );
    let cookie = common::session_cookie(&resp);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Hello"));
    assert!(body.contains("First entry"));
    assert!(body.contains("New entry was successfully posted"));
}

#[actix_web::test]
async fn add_entry_with_empty_title_is_400() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);
    let cookie = log_in(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/add")
            .cookie(cookie)
            .set_form(&[("title", ""), ("text", "body")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn add_entry_with_missing_field_is_400() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);
    let cookie = log_in(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/add")
            .cookie(cookie)
            .set_form(&[("title", "only a title")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_reports_post_deleted_even_when_nothing_matched() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);
    let cookie = log_in(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/delete/999")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": 1, "message": "Post Deleted"}));
}

#[actix_web::test]
async fn logout_twice_never_faults() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);
    let cookie = log_in(&app).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let cookie = common::session_cookie(&resp);

    // Second logout on an already-cleared session is a no-op redirect.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
}

#[actix_web::test]
async fn search_without_query_renders_search_page() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/search/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Search"));
}

#[actix_web::test]
async fn search_filters_by_title_substring() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);
    let cookie = log_in(&app).await;

    for (title, text) in [("Rust in prod", "a"), ("Weekend notes", "b")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/add")
                .cookie(cookie.clone())
                .set_form(&[("title", title), ("text", text)])
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/search/?query=Rust")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Rust in prod"));
    assert!(!body.contains("Weekend notes"));
}

#[actix_web::test]
async fn health_reports_ok() {
    let (state, _db) = common::build_state().await;
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}
