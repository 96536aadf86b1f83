use rusqlite::Connection;
use tracing::info;

use crate::error::StoreError;

/// Idempotent schema setup, run every time the database is opened.
///
/// `users` deliberately has no UNIQUE constraint on username or email:
/// whether duplicate accounts should be rejected is an unresolved product
/// question, so the store accepts them.
pub fn run(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL,
            email       TEXT NOT NULL,
            role        TEXT NOT NULL,
            password    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_users_email
            ON users(email);

        CREATE TABLE IF NOT EXISTS conversion_log (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            amount           TEXT NOT NULL,
            from_currency    TEXT NOT NULL,
            to_currency      TEXT NOT NULL,
            converted_amount TEXT NOT NULL,
            timestamp        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS balance_table (
            id      INTEGER PRIMARY KEY CHECK (id = 0),
            amount  REAL NOT NULL
        );
        ",
    )?;

    info!("database migrations complete");
    Ok(())
}
