//! `SQLite` implementation of [`SquirrelRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use scurry_app::ports::SquirrelRepository;
use scurry_domain::error::ScurryError;
use scurry_domain::id::SquirrelId;
use scurry_domain::squirrel::{Squirrel, SquirrelAttributes};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Squirrel`].
struct Wrapper(Squirrel);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Squirrel> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let size: String = row.try_get("size")?;

        Ok(Self(Squirrel {
            id: SquirrelId::from_i64(id),
            name,
            size,
        }))
    }
}

const INSERT: &str = "INSERT INTO squirrels (name, size) VALUES (?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM squirrels WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM squirrels ORDER BY id";
const UPDATE: &str = "UPDATE squirrels SET name = ?, size = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM squirrels WHERE id = ?";

/// `SQLite`-backed squirrel repository.
///
/// Ids come from the `AUTOINCREMENT` column, so they are strictly
/// increasing and never reissued after a delete.
pub struct SqliteSquirrelRepository {
    pool: SqlitePool,
}

impl SqliteSquirrelRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SquirrelRepository for SqliteSquirrelRepository {
    fn create(
        &self,
        attrs: SquirrelAttributes,
    ) -> impl Future<Output = Result<Squirrel, ScurryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(attrs.name())
                .bind(attrs.size())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = SquirrelId::from_i64(result.last_insert_rowid());
            Ok(attrs.into_squirrel(id))
        }
    }

    fn get_by_id(
        &self,
        id: SquirrelId,
    ) -> impl Future<Output = Result<Option<Squirrel>, ScurryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Squirrel>, ScurryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: SquirrelId,
        attrs: SquirrelAttributes,
    ) -> impl Future<Output = Result<bool, ScurryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(attrs.name())
                .bind(attrs.size())
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: SquirrelId) -> impl Future<Output = Result<bool, ScurryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteSquirrelRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteSquirrelRepository::new(db.pool().clone())
    }

    fn attrs(name: &str, size: &str) -> SquirrelAttributes {
        SquirrelAttributes::builder()
            .name(name)
            .size(size)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_one_to_first_record() {
        let repo = setup().await;

        let created = repo.create(attrs("Rocky", "large")).await.unwrap();
        assert_eq!(created.id, SquirrelId::from_i64(1));

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_none_when_squirrel_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(SquirrelId::from_i64(99)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_ascending_by_id() {
        let repo = setup().await;
        repo.create(attrs("First", "large")).await.unwrap();
        repo.create(attrs("Second", "small")).await.unwrap();
        repo.create(attrs("Third", "medium")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|s| s.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[0].name, "First");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_table_empty() {
        let repo = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_update_fields_in_place() {
        let repo = setup().await;
        let created = repo.create(attrs("Rocky", "large")).await.unwrap();

        let updated = repo
            .update(created.id, attrs("Rocky", "small"))
            .await
            .unwrap();
        assert!(updated);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.size, "small");
    }

    #[tokio::test]
    async fn should_report_no_match_when_updating_missing_id() {
        let repo = setup().await;
        let updated = repo
            .update(SquirrelId::from_i64(42), attrs("Ghost", "tiny"))
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn should_delete_and_report_match() {
        let repo = setup().await;
        let created = repo.create(attrs("Temp", "medium")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn should_never_reuse_deleted_ids() {
        let repo = setup().await;
        let first = repo.create(attrs("First", "large")).await.unwrap();
        let second = repo.create(attrs("Second", "small")).await.unwrap();

        repo.delete(second.id).await.unwrap();
        let third = repo.create(attrs("Third", "medium")).await.unwrap();

        assert!(third.id > second.id);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_keep_remaining_record_with_original_id_after_delete() {
        let repo = setup().await;
        let first = repo.create(attrs("Keep", "large")).await.unwrap();
        let second = repo.create(attrs("Drop", "small")).await.unwrap();

        repo.delete(first.id).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[0].name, "Drop");
    }
}
