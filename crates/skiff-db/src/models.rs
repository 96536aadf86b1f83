//! Database row types — these map directly to SQLite rows.
//! Typed domain models live in skiff-types; this layer stays string-level.

pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    /// Argon2 PHC hash, never the raw password.
    pub password: String,
}

pub struct ConversionRow {
    pub id: i64,
    pub amount: String,
    pub from_currency: String,
    pub to_currency: String,
    pub converted_amount: String,
    pub timestamp: String,
}
