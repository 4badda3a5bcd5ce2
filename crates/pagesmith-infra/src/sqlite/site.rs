//! SQLite site store implementation.
//!
//! Implements `SiteStore` from `pagesmith-core`. Inserts rely on the `slug`
//! primary key for uniqueness: a duplicate insert fails atomically and leaves
//! the existing row alone.

use sqlx::Row;

use pagesmith_core::site::store::SiteStore;
use pagesmith_types::error::StorageError;
use pagesmith_types::site::Site;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `SiteStore`.
#[derive(Clone)]
pub struct SqliteSiteStore {
    pool: DatabasePool,
}

impl SqliteSiteStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn site_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Site, sqlx::Error> {
    Ok(Site {
        slug: row.try_get("slug")?,
        title: row.try_get("title")?,
        html: row.try_get("html")?,
        views: row.try_get("views")?,
    })
}

fn db_error(e: sqlx::Error) -> StorageError {
    StorageError::Database(e.to_string())
}

impl SiteStore for SqliteSiteStore {
    async fn put(&self, site: &Site) -> Result<(), StorageError> {
        let result = sqlx::query("INSERT INTO sites (slug, title, html) VALUES (?, ?, ?)")
            .bind(&site.slug)
            .bind(&site.title)
            .bind(&site.html)
            .execute(&self.pool.writer)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StorageError::DuplicateKey(site.slug.clone()))
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn get(&self, slug: &str) -> Result<Option<Site>, StorageError> {
        let row = sqlx::query("SELECT slug, title, html, views FROM sites WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(db_error)?;

        row.as_ref().map(site_from_row).transpose().map_err(db_error)
    }

    async fn record_view(&self, slug: &str) -> Result<(), StorageError> {
        let result = sqlx::query("UPDATE sites SET views = views + 1 WHERE slug = ?")
            .bind(slug)
            .execute(&self.pool.writer)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
