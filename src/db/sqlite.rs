use crate::db::models::{InquiryRecord, NewInquiry};
use crate::db::schema::{DEFAULT_STATUS, SQLITE_INIT};
use crate::error::DeskError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Every method runs a single statement against the pool; the pooled
/// connection goes back on drop, on the error path as well.
#[derive(Clone)]
pub struct InquiryStore {
    pool: SqlitePool,
}

impl InquiryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and ensure the schema.
    pub async fn connect(database_url: &str) -> Result<Self, DeskError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        info!(database_url = %database_url, "inquiry store ready");
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent.
    pub async fn init_schema(&self) -> Result<(), DeskError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Append a record with status `Active`. Returns the new row id.
    pub async fn insert(&self, inquiry: NewInquiry) -> Result<i64, DeskError> {
        let created_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"
            INSERT INTO contact_messages (
                name, email, phone, company_name, telegram_username,
                interest, message, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(inquiry.name)
        .bind(inquiry.email)
        .bind(inquiry.phone)
        .bind(inquiry.company_name)
        .bind(inquiry.telegram_username)
        .bind(inquiry.interest)
        .bind(inquiry.message)
        .bind(DEFAULT_STATUS)
        .bind(created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// All records in insertion order.
    pub async fn list_all(&self) -> Result<Vec<InquiryRecord>, DeskError> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, phone, company_name, telegram_username,
               interest, message, status, created_at
               FROM contact_messages ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get(&self, id: i64) -> Result<Option<InquiryRecord>, DeskError> {
        let row = sqlx::query(
            r#"SELECT id, name, email, phone, company_name, telegram_username,
               interest, message, status, created_at
               FROM contact_messages WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_model).transpose()
    }

    /// Returns whether a row matched. A missing id is not an error.
    pub async fn update_status(&self, id: i64, status: &str) -> Result<bool, DeskError> {
        let result = sqlx::query("UPDATE contact_messages SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns whether a row matched. A missing id is not an error.
    pub async fn delete(&self, id: i64) -> Result<bool, DeskError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    fn row_to_model(row: SqliteRow) -> Result<InquiryRecord, DeskError> {
        let created_at_str: String = row.try_get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(InquiryRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            company_name: row.try_get("company_name")?,
            telegram_username: row.try_get("telegram_username")?,
            interest: row.try_get("interest")?,
            message: row.try_get("message")?,
            status: row.try_get("status")?,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> InquiryStore {
        // One connection: every `sqlite::memory:` connection is its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory sqlite");
        let store = InquiryStore::new(pool);
        store.init_schema().await.expect("init schema");
        store
    }

    fn inquiry(n: usize) -> NewInquiry {
        NewInquiry {
            name: format!("Name {n}"),
            email: format!("user{n}@example.com"),
            phone: format!("555-010{n}"),
            company_name: (n % 2 == 0).then(|| format!("Company {n}")),
            telegram_username: None,
            interest: format!("Interest {n}"),
            message: format!("Message body {n}"),
        }
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let store = memory_store().await;
        store.init_schema().await.expect("second init");
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_defaults_status_and_preserves_fields() {
        let store = memory_store().await;
        let form = inquiry(2);
        let id = store.insert(form.clone()).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        let rec = &all[0];
        assert_eq!(rec.id, id);
        assert_eq!(rec.status, "Active");
        assert_eq!(rec.name, form.name);
        assert_eq!(rec.email, form.email);
        assert_eq!(rec.phone, form.phone);
        assert_eq!(rec.company_name, form.company_name);
        assert_eq!(rec.telegram_username, None);
        assert_eq!(rec.interest, form.interest);
        assert_eq!(rec.message, form.message);
    }

    #[tokio::test]
    async fn list_all_returns_every_record_in_insertion_order() {
        let store = memory_store().await;
        let mut ids = Vec::new();
        for n in 0..5 {
            ids.push(store.insert(inquiry(n)).await.unwrap());
        }

        let all = store.list_all().await.unwrap();
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
        for (n, rec) in all.iter().enumerate() {
            assert_eq!(rec.email, format!("user{n}@example.com"));
        }

        // ids are stable across reads
        let again = store.list_all().await.unwrap();
        assert_eq!(all, again);
    }

    #[tokio::test]
    async fn update_status_touches_only_status() {
        let store = memory_store().await;
        let id = store.insert(inquiry(1)).await.unwrap();
        let other = store.insert(inquiry(3)).await.unwrap();
        let before = store.get(id).await.unwrap().unwrap();

        assert!(store.update_status(id, "Closed").await.unwrap());

        let after = store.get(id).await.unwrap().unwrap();
        assert_eq!(after.status, "Closed");
        assert_eq!(
            InquiryRecord {
                status: before.status.clone(),
                ..after
            },
            before
        );
        assert_eq!(store.get(other).await.unwrap().unwrap().status, "Active");
    }

    #[tokio::test]
    async fn missing_ids_are_silent_noops() {
        let store = memory_store().await;
        store.insert(inquiry(1)).await.unwrap();
        let before = store.list_all().await.unwrap();

        assert!(!store.update_status(9999, "Closed").await.unwrap());
        assert!(!store.delete(9999).await.unwrap());

        assert_eq!(store.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_row_and_ids_are_not_reused() {
        let store = memory_store().await;
        let first = store.insert(inquiry(1)).await.unwrap();
        let second = store.insert(inquiry(2)).await.unwrap();

        assert!(store.delete(second).await.unwrap());
        assert!(store.get(second).await.unwrap().is_none());
        assert!(store.get(first).await.unwrap().is_some());

        let third = store.insert(inquiry(3)).await.unwrap();
        assert!(third > second);
    }
}
