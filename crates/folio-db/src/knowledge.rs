use crate::error::{DbError, DbResult};
use crate::models::{KbEntry, KbEntryRaw};
use chrono::Utc;
use sqlx::{Any, Pool};

/// Insert a knowledge base entry (folder or file)
pub async fn create_entry(
    pool: &Pool<Any>,
    parent_id: Option<i64>,
    name: &str,
    kind: &str,
    content: Option<&str>,
) -> DbResult<KbEntry> {
    let now_str = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO kb_entries (parent_id, name, kind, content, updated_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(parent_id)
    .bind(name)
    .bind(kind)
    .bind(content)
    .bind(&now_str)
    .execute(pool)
    .await?;

    let id = result
        .last_insert_id()
        .ok_or(DbError::SqlxError(sqlx::Error::RowNotFound))?;

    get_entry(pool, id)
        .await?
        .ok_or(DbError::SqlxError(sqlx::Error::RowNotFound))
}

/// Get an entry by ID
pub async fn get_entry(pool: &Pool<Any>, id: i64) -> DbResult<Option<KbEntry>> {
    let entry = sqlx::query_as::<_, KbEntryRaw>(
        "SELECT id, parent_id, name, kind, content, updated_at
         FROM kb_entries
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .map(|raw| raw.into());

    Ok(entry)
}

/// List the whole knowledge base, folders before files, then by name
///
/// The client rebuilds the tree from `parent_id` links.
pub async fn list_entries(pool: &Pool<Any>) -> DbResult<Vec<KbEntry>> {
    let entries = sqlx::query_as::<_, KbEntryRaw>(
        "SELECT id, parent_id, name, kind, content, updated_at
         FROM kb_entries
         ORDER BY kind DESC, name ASC",
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|raw| raw.into())
    .collect();

    Ok(entries)
}
