/// Note handlers - JSON REST endpoints for the notes resource
///
/// All endpoints are unauthenticated. Request bodies are decoded through an
/// explicit parse result and ordinary branching, so a malformed body is a 400
/// with `{"error": "Invalid JSON"}` rather than an unwound extractor fault.
use actix_web::{web, HttpResponse};

use crate::db::note_repo;
use crate::error::{AppError, Result};
use crate::AppState;

/// Pull the required `content` string out of a raw request body.
///
/// An absent body, a non-object document, and a missing, empty, or non-string
/// `content` key all read as "Content is required"; only a body that fails to
/// parse at all is "Invalid JSON".
fn parse_content(body: &web::Bytes) -> Result<String> {
    if body.is_empty() {
        return Err(AppError::BadRequest("Content is required".to_string()));
    }

    let document: serde_json::Value = match serde_json::from_slice(body) {
        Ok(document) => document,
        Err(_) => return Err(AppError::BadRequest("Invalid JSON".to_string())),
    };

    match document.get("content").and_then(serde_json::Value::as_str) {
        Some(content) if !content.trim().is_empty() => Ok(content.to_string()),
        _ => Err(AppError::BadRequest("Content is required".to_string())),
    }
}

/// GET /api/notes
pub async fn list_notes(state: web::Data<AppState>) -> Result<HttpResponse> {
    let notes = note_repo::list_notes(&state.db).await?;

    Ok(HttpResponse::Ok().json(notes))
}

/// GET /api/notes/{id}
pub async fn get_note(state: web::Data<AppState>, note_id: web::Path<i64>) -> Result<HttpResponse> {
    match note_repo::find_note(&state.db, *note_id).await? {
        Some(note) => Ok(HttpResponse::Ok().json(note)),
        None => Err(AppError::NotFound("Note not found".to_string())),
    }
}

/// POST /api/notes
pub async fn create_note(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let content = parse_content(&body)?;
    let note = note_repo::insert_note(&state.db, &content).await?;

    Ok(HttpResponse::Created().json(note))
}

/// PUT /api/notes/{id}
///
/// The existence check runs before any body validation: updating a
/// nonexistent id yields 404 even when the body is malformed.
pub async fn update_note(
    state: web::Data<AppState>,
    note_id: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    if note_repo::find_note(&state.db, *note_id).await?.is_none() {
        return Err(AppError::NotFound("Note not found".to_string()));
    }

    let content = parse_content(&body)?;
    let note = note_repo::update_note(&state.db, *note_id, &content).await?;

    Ok(HttpResponse::Ok().json(note))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    state: web::Data<AppState>,
    note_id: web::Path<i64>,
) -> Result<HttpResponse> {
    if note_repo::find_note(&state.db, *note_id).await?.is_none() {
        return Err(AppError::NotFound("Note not found".to_string()));
    }

    note_repo::delete_note(&state.db, *note_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Note deleted" })))
}
