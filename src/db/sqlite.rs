use crate::db::models::{Swimmer, SwimmerFields};
use crate::db::schema::SQLITE_INIT;
use crate::error::RegistryError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct SwimmerStorage {
    pool: SqlitePool,
}

impl SwimmerStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if missing) and make sure the table exists.
    pub async fn connect(database_url: &str) -> Result<Self, RegistryError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        info!(database_url, "swimmer storage ready");
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL. Safe to call repeatedly.
    pub async fn init_schema(&self) -> Result<(), RegistryError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a new record. Returns it with the id assigned by the store.
    pub async fn insert(&self, fields: SwimmerFields) -> Result<Swimmer, RegistryError> {
        let id = sqlx::query("INSERT INTO swimmer (name, is_swimmer, summary) VALUES (?, ?, ?)")
            .bind(&fields.name)
            .bind(fields.is_swimmer)
            .bind(&fields.summary)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        info!(id, name = %fields.name, "swimmer inserted");
        Ok(fields.into_swimmer(id))
    }

    pub async fn get(&self, id: i64) -> Result<Option<Swimmer>, RegistryError> {
        let row = sqlx::query_as::<_, Swimmer>(
            "SELECT id, name, is_swimmer, summary FROM swimmer WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        debug!(id, found = row.is_some(), "swimmer lookup");
        Ok(row)
    }

    /// Like [`get`](Self::get), but absence is an error.
    pub async fn get_or_fail(&self, id: i64) -> Result<Swimmer, RegistryError> {
        self.get(id).await?.ok_or(RegistryError::NotFound(id))
    }

    /// Every record in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Swimmer>, RegistryError> {
        let rows = sqlx::query_as::<_, Swimmer>(
            "SELECT id, name, is_swimmer, summary FROM swimmer ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!(count = rows.len(), "swimmers listed");
        Ok(rows)
    }

    /// Overwrite all mutable fields in one statement.
    pub async fn update(&self, id: i64, fields: SwimmerFields) -> Result<Swimmer, RegistryError> {
        let affected = sqlx::query(
            r#"UPDATE swimmer SET
                name = ?,
                is_swimmer = ?,
                summary = ?
              WHERE id = ?"#,
        )
        .bind(&fields.name)
        .bind(fields.is_swimmer)
        .bind(&fields.summary)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected == 0 {
            return Err(RegistryError::NotFound(id));
        }
        info!(id, "swimmer updated");
        Ok(fields.into_swimmer(id))
    }

    /// Remove a record. Returns whether anything was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool, RegistryError> {
        let affected = sqlx::query("DELETE FROM swimmer WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        let deleted = affected > 0;
        if deleted {
            info!(id, "swimmer deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_storage() -> SwimmerStorage {
        // one connection, otherwise each gets its own in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory sqlite");
        let storage = SwimmerStorage::new(pool);
        storage.init_schema().await.expect("init schema");
        storage
    }

    fn fields(name: &str) -> SwimmerFields {
        SwimmerFields {
            name: name.to_string(),
            is_swimmer: true,
            summary: format!("{name} is a swimmer"),
        }
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let storage = memory_storage().await;
        storage.init_schema().await.expect("second init");
        storage.insert(fields("Mark Spitz")).await.expect("insert");
        storage.init_schema().await.expect("third init");
        assert_eq!(storage.list_all().await.expect("list").len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let storage = memory_storage().await;
        let first = storage.insert(fields("Dick Roth")).await.expect("insert");
        assert!(storage.delete(first.id).await.expect("delete"));
        let second = storage.insert(fields("Claudia Kolb")).await.expect("insert");
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let storage = memory_storage().await;
        let err = storage.update(42, fields("Nobody")).await.unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(42)));
    }

    #[tokio::test]
    async fn list_is_in_insertion_order() {
        let storage = memory_storage().await;
        for name in ["Mark Spitz", "Dick Roth", "Martha Randall"] {
            storage.insert(fields(name)).await.expect("insert");
        }
        let names: Vec<_> = storage
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Mark Spitz", "Dick Roth", "Martha Randall"]);
    }

    #[tokio::test]
    async fn delete_missing_id_is_a_no_op() {
        let storage = memory_storage().await;
        storage.insert(fields("Mark Spitz")).await.expect("insert");
        assert!(!storage.delete(999).await.expect("delete"));
        assert_eq!(storage.list_all().await.expect("list").len(), 1);
    }
}
