//! Repository layer for account storage.

use crate::domain::{Account, AccountDraft};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::warn;

/// Repository for account database operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a new account and return it with its assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn create_account(&self, draft: &AccountDraft) -> Result<Account, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (name, email, address, phone_number, date_joined, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.address)
        .bind(draft.phone_number.as_deref())
        .bind(draft.date_joined.to_string())
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(draft.clone().into_account(result.last_insert_rowid()))
    }

    /// Fetch a single account by id. Returns None if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn find_account(&self, id: i64) -> Result<Option<Account>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| account_from_row(&r)))
    }

    /// List all accounts ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, address, phone_number, date_joined
            FROM accounts
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(account_from_row).collect())
    }

    /// Overwrite an existing account's fields.
    ///
    /// Returns the updated account, or None if no account has that id.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_account(
        &self,
        id: i64,
        draft: &AccountDraft,
    ) -> Result<Option<Account>, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET name = ?, email = ?, address = ?, phone_number = ?, date_joined = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.address)
        .bind(draft.phone_number.as_deref())
        .bind(draft.date_joined.to_string())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Ok(Some(draft.clone().into_account(id)))
    }

    /// Delete an account by id. Returns true if a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_account(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn account_from_row(row: &sqlx::sqlite::SqliteRow) -> Account {
    let id: i64 = row.get("id");
    let date_str: String = row.get("date_joined");

    let date_joined = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_else(|e| {
        warn!(
            account_id = id,
            date_joined = %date_str,
            error = %e,
            "Failed to parse stored date_joined, using default"
        );
        NaiveDate::default()
    });

    Account {
        id,
        name: row.get("name"),
        email: row.get("email"),
        address: row.get("address"),
        phone_number: row.get("phone_number"),
        date_joined,
    }
}
