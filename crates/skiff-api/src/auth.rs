use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use tracing::warn;

use skiff_db::models::UserRow;
use skiff_db::Database;
use skiff_types::{NewUser, Role, User};

use crate::error::ServiceError;

/// Register/login over the credential table. Passwords are stored as
/// salted Argon2id hashes; the raw value never reaches the database.
#[derive(Clone)]
pub struct AuthService {
    db: Arc<Database>,
}

impl AuthService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a new user and return it with its assigned id.
    ///
    /// Duplicate usernames and emails are accepted; field validation
    /// (blank fields, password confirmation) is the caller's job.
    pub async fn register(&self, new_user: NewUser) -> Result<User, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(new_user.password.as_bytes(), &salt)
            .map_err(|e| ServiceError::PasswordHash(e.to_string()))?
            .to_string();

        let NewUser {
            username,
            email,
            role,
            ..
        } = new_user;

        // Run the blocking insert off the async runtime
        let db = self.db.clone();
        let id = {
            let username = username.clone();
            let email = email.clone();
            tokio::task::spawn_blocking(move || {
                db.insert_user(&username, &email, role.as_str(), &password_hash)
            })
            .await??
        };

        Ok(User {
            id,
            username,
            email,
            role,
        })
    }

    /// Find the first user whose email matches and whose stored hash
    /// verifies against `password`. `None` when no credential matches —
    /// a failed login is not an error.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, ServiceError> {
        let db = self.db.clone();
        let lookup = email.to_string();
        let rows = tokio::task::spawn_blocking(move || db.get_users_by_email(&lookup)).await??;

        for row in rows {
            let parsed_hash = match PasswordHash::new(&row.password) {
                Ok(hash) => hash,
                Err(e) => {
                    warn!(user_id = row.id, "unreadable password hash: {}", e);
                    continue;
                }
            };

            if Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
            {
                return Ok(Some(user_from_row(row)));
            }
        }

        Ok(None)
    }
}

fn user_from_row(row: UserRow) -> User {
    let role = row.role.parse().unwrap_or_else(|_| {
        warn!(user_id = row.id, "unknown role '{}', treating as guest", row.role);
        Role::Guest
    });

    User {
        id: row.id,
        username: row.username,
        email: row.email,
        role,
    }
}
