use super::models::User;
use super::DbPool;
use sqlx::query_as;

pub struct UserRepository;

impl UserRepository {
    /// Insert a fully-populated user row.
    pub async fn insert(pool: &DbPool, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO users \
             (id, first_name, last_name, email, password, remember_token, \
              created_at, updated_at, deleted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.remember_token)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(user.deleted_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Count all user rows, seeded or otherwise.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(row.0)
    }
}
