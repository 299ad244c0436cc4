/// Page handlers - the HTML flow for posts and authentication
use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::db::post_repo;
use crate::error::{AppError, Result};
use crate::models::Post;
use crate::session::TypedSession;
use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    entries: Vec<Post>,
    flashes: Vec<String>,
    logged_in: bool,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
    flashes: Vec<String>,
    logged_in: bool,
}

#[derive(Template)]
#[template(path = "search.html")]
struct SearchTemplate {
    entries: Vec<Post>,
    query: Option<String>,
    flashes: Vec<String>,
    logged_in: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreatePostForm {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

fn render_page<T: Template>(template: T) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(template.render()?))
}

fn redirect_to_index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// List all posts.
pub async fn index(state: web::Data<AppState>, session: TypedSession) -> Result<HttpResponse> {
    let entries = post_repo::list_posts(&state.db).await?;

    render_page(IndexTemplate {
        entries,
        flashes: session.take_flashes()?,
        logged_in: session.is_logged_in()?,
    })
}

/// Create a post from the submitted form. Gated by `SessionAuth`.
pub async fn add_entry(
    state: web::Data<AppState>,
    session: TypedSession,
    form: web::Form<CreatePostForm>,
) -> Result<HttpResponse> {
    if form.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if form.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    post_repo::insert_post(&state.db, &form.title, &form.text).await?;
    session.flash("New entry was successfully posted")?;

    Ok(redirect_to_index())
}

/// Render the login form.
pub async fn login_form(session: TypedSession) -> Result<HttpResponse> {
    render_page(LoginTemplate {
        error: None,
        flashes: session.take_flashes()?,
        logged_in: session.is_logged_in()?,
    })
}

/// Check the submitted credential pair. The username is validated strictly
/// before the password, so a wrong username never reveals whether the
/// password would have matched.
pub async fn login(
    state: web::Data<AppState>,
    session: TypedSession,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse> {
    let auth = &state.config.auth;

    let error = if form.username != auth.username {
        Some("Invalid username".to_string())
    } else if form.password != auth.password {
        Some("Invalid password".to_string())
    } else {
        session.log_in()?;
        session.flash("You were logged in")?;
        return Ok(redirect_to_index());
    };

    render_page(LoginTemplate {
        error,
        flashes: session.take_flashes()?,
        logged_in: session.is_logged_in()?,
    })
}

/// Clear the login flag. Idempotent.
pub async fn logout(session: TypedSession) -> Result<HttpResponse> {
    session.log_out();
    session.flash("You were logged out")?;

    Ok(redirect_to_index())
}

/// Delete a post by id. Gated by `SessionAuth`.
///
/// Preserved contract quirk: the response is HTTP 200 even when no row
/// matched, and a store fault is reported as `{"status": 0}` with the same
/// 200 status instead of a 5xx.
pub async fn delete_entry(
    state: web::Data<AppState>,
    session: TypedSession,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    match post_repo::delete_post(&state.db, *post_id).await {
        Ok(_) => {
            if let Err(err) = session.flash("The entry was deleted.") {
                tracing::warn!("failed to attach deletion flash: {}", err);
            }
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "status": 1,
                "message": "Post Deleted",
            })))
        }
        Err(err) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "status": 0,
            "message": err.to_string(),
        }))),
    }
}

/// Search posts by title substring. Without a query, render the empty search
/// page.
pub async fn search(
    state: web::Data<AppState>,
    session: TypedSession,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    let flashes = session.take_flashes()?;
    let logged_in = session.is_logged_in()?;

    match params.query.as_deref() {
        Some(query) if !query.is_empty() => {
            let entries = post_repo::search_posts(&state.db, query).await?;
            render_page(SearchTemplate {
                entries,
                query: Some(query.to_string()),
                flashes,
                logged_in,
            })
        }
        _ => render_page(SearchTemplate {
            entries: Vec::new(),
            query: None,
            flashes,
            logged_in,
        }),
    }
}
