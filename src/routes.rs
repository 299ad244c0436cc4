/// Routing - maps HTTP method + path to a handler, independent of business
/// logic. The auth gate is composed declaratively onto the two routes that
/// mutate posts.
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::middleware::SessionAuth;
use crate::openapi::ApiDoc;
use crate::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    let openapi = ApiDoc::openapi();

    cfg.service(SwaggerUi::new("/docs/{_:.*}").url("/api/openapi.json", openapi))
        .route("/docs", web::get().to(docs_redirect))
        .route("/health", web::get().to(health))
        .route("/", web::get().to(handlers::index))
        .service(
            web::resource("/add")
                .wrap(SessionAuth)
                .route(web::post().to(handlers::add_entry)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(handlers::login_form))
                .route(web::post().to(handlers::login)),
        )
        .route("/logout", web::get().to(handlers::logout))
        .service(
            web::resource("/delete/{post_id}")
                .wrap(SessionAuth)
                .route(web::get().to(handlers::delete_entry)),
        )
        .route("/search/", web::get().to(handlers::search))
        .service(
            web::scope("/api")
                .service(
                    web::resource("/notes")
                        .route(web::get().to(handlers::list_notes))
                        .route(web::post().to(handlers::create_note)),
                )
                .service(
                    web::resource("/notes/{note_id}")
                        .route(web::get().to(handlers::get_note))
                        .route(web::put().to(handlers::update_note))
                        .route(web::delete().to(handlers::delete_note)),
                ),
        );
}

async fn docs_redirect() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/docs/"))
        .finish()
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "scribe-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(err) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("store connection failed: {}", err),
            "service": "scribe-service",
        })),
    }
}
