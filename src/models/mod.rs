/// Data models for scribe-service
///
/// Two independent record types, no foreign keys between them:
/// - Post: a blog entry, mutated only through the authenticated HTML flow
/// - Note: a plain text note with full unauthenticated CRUD over JSON
use serde::Serialize;
use utoipa::ToSchema;

/// A blog post. Created via the authenticated form, never updated in place,
/// deleted by id.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub text: String,
}

/// A note exposed over the JSON REST API as `{id, content}`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Note {
    pub id: i64,
    pub content: String,
}
