use rusqlite::Connection;

use crate::error::StoreError;
use crate::models::{ConversionRow, UserRow};
use crate::Database;

impl Database {
    // -- Users --

    /// Insert a user row and return its assigned id.
    pub fn insert_user(
        &self,
        username: &str,
        email: &str,
        role: &str,
        password_hash: &str,
    ) -> Result<i64, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (username, email, role, password) VALUES (?1, ?2, ?3, ?4)",
                (username, email, role, password_hash),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// All rows matching an email, oldest first. Duplicate emails are
    /// allowed, so this can return more than one row.
    pub fn get_users_by_email(&self, email: &str) -> Result<Vec<UserRow>, StoreError> {
        self.with_conn(|conn| query_users_by_email(conn, email))
    }

    pub fn get_user_by_id(&self, id: i64) -> Result<Option<UserRow>, StoreError> {
        self.with_conn(|conn| query_user_by_id(conn, id))
    }

    // -- Conversion ledger --

    /// Append a conversion record and return its assigned id. Records are
    /// immutable once written; ids increase with insertion order.
    pub fn insert_conversion(
        &self,
        amount: &str,
        from_currency: &str,
        to_currency: &str,
        converted_amount: &str,
        timestamp: &str,
    ) -> Result<i64, StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO conversion_log (amount, from_currency, to_currency, converted_amount, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (amount, from_currency, to_currency, converted_amount, timestamp),
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Recorded conversions, most recent first. `None` returns everything.
    pub fn list_conversions(&self, limit: Option<u32>) -> Result<Vec<ConversionRow>, StoreError> {
        self.with_conn(|conn| query_conversions(conn, limit))
    }

    // -- Balance --

    /// The singleton balance amount, or `None` if never written.
    pub fn get_balance(&self) -> Result<Option<f64>, StoreError> {
        self.with_conn(|conn| {
            conn.query_row("SELECT amount FROM balance_table WHERE id = 0", [], |row| {
                row.get(0)
            })
            .optional()
        })
    }

    /// Upsert the singleton balance row; last write wins.
    pub fn upsert_balance(&self, amount: f64) -> Result<(), StoreError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO balance_table (id, amount) VALUES (0, ?1)
                 ON CONFLICT(id) DO UPDATE SET amount = excluded.amount",
                [amount],
            )?;
            Ok(())
        })
    }
}

fn query_users_by_email(conn: &Connection, email: &str) -> Result<Vec<UserRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, username, email, role, password FROM users WHERE email = ?1 ORDER BY id",
    )?;

    let rows = stmt
        .query_map([email], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                email: row.get(2)?,
                role: row.get(3)?,
                password: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, rusqlite::Error>>()?;

    Ok(rows)
}

fn query_user_by_id(conn: &Connection, id: i64) -> Result<Option<UserRow>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT id, username, email, role, password FROM users WHERE id = ?1")?;

    stmt.query_row([id], |row| {
        Ok(UserRow {
            id: row.get(0)?,
            username: row.get(1)?,
            email: row.get(2)?,
            role: row.get(3)?,
            password: row.get(4)?,
        })
    })
    .optional()
}

fn query_conversions(
    conn: &Connection,
    limit: Option<u32>,
) -> Result<Vec<ConversionRow>, StoreError> {
    // SQLite treats a negative LIMIT as unbounded.
    let limit = limit.map_or(-1, i64::from);

    let mut stmt = conn.prepare(
        "SELECT id, amount, from_currency, to_currency, converted_amount, timestamp
         FROM conversion_log ORDER BY id DESC LIMIT ?1",
    )?;

    let rows = stmt
        .query_map([limit], |row| {
            Ok(ConversionRow {
                id: row.get(0)?,
                amount: row.get(1)?,
                from_currency: row.get(2)?,
                to_currency: row.get(3)?,
                converted_amount: row.get(4)?,
                timestamp: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, rusqlite::Error>>()?;

    Ok(rows)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>, StoreError>;
}

impl<T> OptionalExt<T> for Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>, StoreError> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
