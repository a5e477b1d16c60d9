//! Repository for the `fighter` table.

use chrono::Utc;
use ufc_core::types::DbId;

use crate::models::fighter::{Fighter, FighterChanges, NewFighter};
use crate::DbPool;

/// Column list shared across queries, aliased against [`FROM_JOINED`].
const COLUMNS: &str = "f.id, f.created_at, f.updated_at, \
    f.first_name, f.last_name, f.nickname, f.date_of_birth, \
    f.height, f.weight, f.reach, \
    f.stance_id, s.name AS stance, \
    f.wins, f.losses, f.draws, f.no_contests, f.current_champion, \
    f.slpm, f.str_acc, f.sapm, f.str_def, f.td_avg, f.td_acc, f.td_def, f.sub_avg";

/// Fighters outer-joined with the stance catalog.
const FROM_JOINED: &str = "fighter f LEFT JOIN stance s ON s.id = f.stance_id";

/// Provides CRUD operations for fighters.
pub struct FighterRepo;

impl FighterRepo {
    /// Insert a new fighter, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to now. The stance name is
    /// resolved to an id inside the INSERT; an unknown name stores `NULL`.
    pub async fn create(pool: &DbPool, input: &NewFighter) -> Result<Fighter, sqlx::Error> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO fighter (
                created_at, updated_at,
                first_name, last_name, nickname, date_of_birth,
                height, weight, reach, stance_id,
                wins, losses, draws, no_contests, current_champion,
                slpm, str_acc, sapm, str_def, td_avg, td_acc, td_def, sub_avg
             ) VALUES (
                $1, $1,
                $2, $3, $4, $5,
                $6, $7, $8, (SELECT id FROM stance WHERE name = $9),
                $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22
             )
             RETURNING id",
        )
        .bind(now)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.nickname)
        .bind(input.date_of_birth)
        .bind(input.height)
        .bind(input.weight)
        .bind(input.reach)
        .bind(&input.stance)
        .bind(input.wins)
        .bind(input.losses)
        .bind(input.draws)
        .bind(input.no_contests)
        .bind(input.current_champion)
        .bind(input.slpm)
        .bind(input.str_acc)
        .bind(input.sapm)
        .bind(input.str_def)
        .bind(input.td_avg)
        .bind(input.td_acc)
        .bind(input.td_def)
        .bind(input.sub_avg)
        .fetch_one(&mut *tx)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED} WHERE f.id = $1");
        let fighter = sqlx::query_as::<_, Fighter>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(fighter)
    }

    /// Find a fighter by its ID, with the stance name resolved.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Fighter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED} WHERE f.id = $1");
        sqlx::query_as::<_, Fighter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all fighters in storage order, with stance names resolved.
    pub async fn list(pool: &DbPool) -> Result<Vec<Fighter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED}");
        sqlx::query_as::<_, Fighter>(&query).fetch_all(pool).await
    }

    /// Update a fighter. Only fields present in `input` are applied;
    /// `updated_at` is refreshed unconditionally.
    ///
    /// Nullable columns take a "provided" flag next to their value so that
    /// `Some(None)` clears them. A stance name that is not in the catalog
    /// leaves the stored stance unchanged. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &FighterChanges,
    ) -> Result<Option<Fighter>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE fighter SET
                updated_at = $2,
                first_name = CASE WHEN $3 THEN $4 ELSE first_name END,
                last_name = CASE WHEN $5 THEN $6 ELSE last_name END,
                nickname = CASE WHEN $7 THEN $8 ELSE nickname END,
                date_of_birth = COALESCE($9, date_of_birth),
                height = CASE WHEN $10 THEN $11 ELSE height END,
                weight = CASE WHEN $12 THEN $13 ELSE weight END,
                reach = CASE WHEN $14 THEN $15 ELSE reach END,
                stance_id = COALESCE((SELECT id FROM stance WHERE name = $16), stance_id),
                wins = COALESCE($17, wins),
                losses = COALESCE($18, losses),
                draws = COALESCE($19, draws),
                no_contests = COALESCE($20, no_contests),
                current_champion = COALESCE($21, current_champion),
                slpm = CASE WHEN $22 THEN $23 ELSE slpm END,
                str_acc = CASE WHEN $24 THEN $25 ELSE str_acc END,
                sapm = CASE WHEN $26 THEN $27 ELSE sapm END,
                str_def = CASE WHEN $28 THEN $29 ELSE str_def END,
                td_avg = CASE WHEN $30 THEN $31 ELSE td_avg END,
                td_acc = CASE WHEN $32 THEN $33 ELSE td_acc END,
                td_def = CASE WHEN $34 THEN $35 ELSE td_def END,
                sub_avg = CASE WHEN $36 THEN $37 ELSE sub_avg END
             WHERE id = $1",
        )
        .bind(id)
        .bind(Utc::now())
        .bind(input.first_name.is_some())
        .bind(input.first_name.as_ref().and_then(|v| v.as_deref()))
        .bind(input.last_name.is_some())
        .bind(input.last_name.as_ref().and_then(|v| v.as_deref()))
        .bind(input.nickname.is_some())
        .bind(input.nickname.as_ref().and_then(|v| v.as_deref()))
        .bind(input.date_of_birth)
        .bind(input.height.is_some())
        .bind(input.height.flatten())
        .bind(input.weight.is_some())
        .bind(input.weight.flatten())
        .bind(input.reach.is_some())
        .bind(input.reach.flatten())
        .bind(&input.stance)
        .bind(input.wins)
        .bind(input.losses)
        .bind(input.draws)
        .bind(input.no_contests)
        .bind(input.current_champion)
        .bind(input.slpm.is_some())
        .bind(input.slpm.flatten())
        .bind(input.str_acc.is_some())
        .bind(input.str_acc.flatten())
        .bind(input.sapm.is_some())
        .bind(input.sapm.flatten())
        .bind(input.str_def.is_some())
        .bind(input.str_def.flatten())
        .bind(input.td_avg.is_some())
        .bind(input.td_avg.flatten())
        .bind(input.td_acc.is_some())
        .bind(input.td_acc.flatten())
        .bind(input.td_def.is_some())
        .bind(input.td_def.flatten())
        .bind(input.sub_avg.is_some())
        .bind(input.sub_avg.flatten())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED} WHERE f.id = $1");
        let fighter = sqlx::query_as::<_, Fighter>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(fighter))
    }

    /// Permanently delete a fighter by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fighter WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
