//! Repository for the `stance` lookup table.

use ufc_core::stance::ALL_STANCES;

use crate::models::stance::Stance;
use crate::DbPool;

/// Provides read access to the stance catalog and its one-time seeding.
pub struct StanceRepo;

impl StanceRepo {
    /// List all stances ordered by ID.
    pub async fn list(pool: &DbPool) -> Result<Vec<Stance>, sqlx::Error> {
        sqlx::query_as::<_, Stance>("SELECT id, name FROM stance ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Number of catalog entries.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(id) FROM stance")
            .fetch_one(pool)
            .await
    }

    /// Populate the catalog if the table is empty.
    ///
    /// Returns the number of rows inserted: all catalog entries on the first
    /// run, `0` on every run after that.
    pub async fn seed_if_empty(pool: &DbPool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM stance")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for name in ALL_STANCES {
            let result = sqlx::query("INSERT INTO stance (name) VALUES ($1)")
                .bind(*name)
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        tracing::info!(inserted, "Stance catalog seeded");
        Ok(inserted)
    }
}
