//! Database seeding with synthetic users.

use super::models::User;
use super::repository::UserRepository;
use super::DbPool;
use crate::error::{AppError, Result};
use chrono::Utc;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

/// Rows inserted by a plain `db:seed` run.
pub const DEFAULT_SEED_COUNT: usize = 10;

/// Placeholder credential for seeded accounts. Plaintext and constant,
/// unusable for real authentication.
const SEED_PASSWORD: &str = "123";

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "David", "Erin", "Frank", "Grace", "Henry", "Ivy", "James", "Karen",
    "Liam", "Mona", "Noah", "Olivia", "Peter",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Clark", "Davis", "Evans", "Garcia", "Harris", "Johnson", "King",
    "Lewis", "Martin", "Nelson", "Parker", "Robinson", "Smith", "Walker",
];

/// Build one synthetic user. Every call produces a fresh id, so inserting
/// the result always appends a new row.
pub fn fake_user() -> User {
    let mut rng = rand::thread_rng();
    let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let email = format!(
        "{}.{}{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.gen_range(0..10_000)
    );
    let now = Utc::now();

    User {
        id: Uuid::new_v4().to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email,
        password: SEED_PASSWORD.to_string(),
        remember_token: String::new(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// Insert `count` synthetic users.
///
/// Not idempotent: re-running appends another batch rather than skipping
/// existing rows. The first failed insert stops the run.
pub async fn seed_users(pool: &DbPool, count: usize) -> Result<u64> {
    let mut inserted = 0u64;

    for _ in 0..count {
        let user = fake_user();
        UserRepository::insert(pool, &user)
            .await
            .map_err(|e| AppError::Seed(format!("failed to insert user {}: {e}", user.email)))?;
        inserted += 1;
    }

    info!("Seeded {} users", inserted);
    Ok(inserted)
}
