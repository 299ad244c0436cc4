use sqlx::AnyPool;

use crate::models::Post;

/// Fetch all posts in store-default order.
pub async fn list_posts(pool: &AnyPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT id, title, text FROM posts")
        .fetch_all(pool)
        .await
}

/// Persist a new post and return the created row.
pub async fn insert_post(pool: &AnyPool, title: &str, text: &str) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, text)
        VALUES ($1, $2)
        RETURNING id, title, text
        "#,
    )
    .bind(title)
    .bind(text)
    .fetch_one(pool)
    .await
}

/// Delete zero or one post by id. Returns the number of rows removed; the
/// caller does not existence-check.
pub async fn delete_post(pool: &AnyPool, post_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Fetch posts whose title contains `query`, with store-default `LIKE`
/// substring semantics.
pub async fn search_posts(pool: &AnyPool, query: &str) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>("SELECT id, title, text FROM posts WHERE title LIKE $1")
        .bind(format!("%{query}%"))
        .fetch_all(pool)
        .await
}
