use crate::{DbError, Result as DbErrorResult};

use cs_core::{ContentItem, ContentItemPatch, NewContentItem};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

/// Raw `content_items` row; timestamps are epoch microseconds.
#[derive(Debug, FromRow)]
struct ContentItemRow {
    id: i64,
    title: String,
    description: Option<String>,
    body: String,
    created_at: i64,
    updated_at: i64,
}

impl ContentItemRow {
    fn into_item(self) -> DbErrorResult<ContentItem> {
        Ok(ContentItem {
            id: self.id,
            title: self.title,
            description: self.description,
            body: self.body,
            created_at: micros_to_datetime(self.created_at)?,
            updated_at: micros_to_datetime(self.updated_at)?,
        })
    }
}

#[track_caller]
fn micros_to_datetime(micros: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(micros).ok_or_else(|| DbError::InvalidRow {
        message: format!("timestamp {} is out of range", micros),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub struct ContentItemRepository {
    pool: SqlitePool,
}

impl ContentItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new item. The store assigns the id; both timestamps are set
    /// to the same instant.
    pub async fn create(&self, item: &NewContentItem) -> DbErrorResult<ContentItem> {
        let now = Utc::now().timestamp_micros();

        let row = sqlx::query_as::<_, ContentItemRow>(
            r#"
              INSERT INTO content_items (title, description, body, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              RETURNING id, title, description, body, created_at, updated_at
              "#,
        )
        .bind(item.title())
        .bind(item.description())
        .bind(item.body())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        row.into_item()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<ContentItem> {
        let row = sqlx::query_as::<_, ContentItemRow>(
            r#"
              SELECT id, title, description, body, created_at, updated_at
              FROM content_items
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_item(),
            None => Err(DbError::not_found(id)),
        }
    }

    /// Page through items in insertion order.
    ///
    /// A non-positive `limit` returns nothing (SQLite would read `LIMIT -1`
    /// as unlimited); a negative `skip` is treated as zero.
    pub async fn list(&self, skip: i64, limit: i64) -> DbErrorResult<Vec<ContentItem>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, ContentItemRow>(
            r#"
              SELECT id, title, description, body, created_at, updated_at
              FROM content_items
              ORDER BY id ASC
              LIMIT ? OFFSET ?
              "#,
        )
        .bind(limit)
        .bind(skip.max(0))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ContentItemRow::into_item).collect()
    }

    /// Apply a partial update in one statement.
    ///
    /// Absent fields keep their stored value. `updated_at` always moves
    /// forward, by at least one microsecond, even if the clock has not.
    pub async fn update(&self, id: i64, patch: &ContentItemPatch) -> DbErrorResult<ContentItem> {
        patch.validate()?;

        let now = Utc::now().timestamp_micros();

        let row = sqlx::query_as::<_, ContentItemRow>(
            r#"
              UPDATE content_items
              SET title = CASE WHEN ? THEN ? ELSE title END,
                  description = CASE WHEN ? THEN ? ELSE description END,
                  body = CASE WHEN ? THEN ? ELSE body END,
                  updated_at = MAX(?, updated_at + 1)
              WHERE id = ?
              RETURNING id, title, description, body, created_at, updated_at
              "#,
        )
        .bind(patch.title.is_present())
        .bind(patch.title.value().map(String::as_str))
        .bind(patch.description.is_present())
        .bind(patch.description.value().map(String::as_str))
        .bind(patch.body.is_present())
        .bind(patch.body.value().map(String::as_str))
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_item(),
            None => Err(DbError::not_found(id)),
        }
    }

    /// Hard delete. A second delete of the same id is `NotFound`.
    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        let result = sqlx::query("DELETE FROM content_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(id));
        }

        Ok(())
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM content_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Round trip used by readiness checks
    pub async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
