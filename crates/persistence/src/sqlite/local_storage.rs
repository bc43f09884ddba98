//! Key/value rows backing the client's local storage

use voltup_core::{Error, Result};
use sqlx::SqlitePool;

/// Read a stored value
pub async fn get_item(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let row: Option<(String,)> = sqlx::query_as("SELECT value FROM local_storage WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::StorageError(e.to_string()))?;

    Ok(row.map(|(value,)| value))
}

/// Insert or overwrite a value
pub async fn set_item(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO local_storage (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await
    .map_err(|e| Error::StorageError(e.to_string()))?;

    Ok(())
}

/// Delete a value (no-op when absent)
pub async fn remove_item(pool: &SqlitePool, key: &str) -> Result<()> {
    sqlx::query("DELETE FROM local_storage WHERE key = ?")
        .bind(key)
        .execute(pool)
        .await
        .map_err(|e| Error::StorageError(e.to_string()))?;

    Ok(())
}
