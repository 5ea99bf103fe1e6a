//! Guide queries

use deckhand_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

fn guide_from_row(row: &SqliteRow) -> Guide {
    Guide {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
    }
}

/// Get guide by ID
pub async fn get_by_id(pool: &SqlitePool, id: GuideId) -> Result<Option<Guide>> {
    let row = sqlx::query("SELECT id, title, content FROM guide WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(guide_from_row))
}

/// Insert a guide
///
/// No HTTP route creates guides; this is used for seeding.
pub async fn create(pool: &SqlitePool, title: &str, content: &str) -> Result<Guide> {
    let id = sqlx::query("INSERT INTO guide (title, content) VALUES (?, ?)")
        .bind(title)
        .bind(content)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(Guide {
        id,
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Overwrite title and content of a guide
///
/// Returns `None` without writing anything when no guide has this id.
pub async fn update(pool: &SqlitePool, id: GuideId, guide: UpdateGuide) -> Result<Option<Guide>> {
    let result = sqlx::query("UPDATE guide SET title = ?, content = ? WHERE id = ?")
        .bind(&guide.title)
        .bind(&guide.content)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    Ok(Some(Guide {
        id,
        title: guide.title,
        content: guide.content,
    }))
}
