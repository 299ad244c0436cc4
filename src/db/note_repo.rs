use sqlx::AnyPool;

use crate::models::Note;

/// Fetch all notes in store-default order.
pub async fn list_notes(pool: &AnyPool) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>("SELECT id, content FROM notes")
        .fetch_all(pool)
        .await
}

/// Find a note by id.
pub async fn find_note(pool: &AnyPool, note_id: i64) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>("SELECT id, content FROM notes WHERE id = $1")
        .bind(note_id)
        .fetch_optional(pool)
        .await
}

/// Persist a new note and return the created row.
pub async fn insert_note(pool: &AnyPool, content: &str) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (content)
        VALUES ($1)
        RETURNING id, content
        "#,
    )
    .bind(content)
    .fetch_one(pool)
    .await
}

/// Replace a note's content wholesale and return the updated row.
pub async fn update_note(pool: &AnyPool, note_id: i64, content: &str) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        UPDATE notes
        SET content = $1
        WHERE id = $2
        RETURNING id, content
        "#,
    )
    .bind(content)
    .bind(note_id)
    .fetch_one(pool)
    .await
}

/// Delete a note by id. Returns the number of rows removed.
pub async fn delete_note(pool: &AnyPool, note_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(note_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
