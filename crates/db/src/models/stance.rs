//! Stance lookup model.

use serde::Serialize;
use sqlx::FromRow;
use ufc_core::types::DbId;

/// A row from the `stance` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Stance {
    pub id: DbId,
    pub name: String,
}
