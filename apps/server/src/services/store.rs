// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan storage service: persists coverage plans to SQLite.
//!
//! A plan row holds the metadata; its trajectory lives in `plan_points`,
//! one row per point keyed by `(plan_id, seq)`.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};
use wallcover_planner::Point2D;

use crate::error::ApiError;
use crate::types::PlanPoint;

/// Rows per multi-row INSERT. Four bound parameters per row keeps each
/// statement well under SQLite's variable limit.
const BATCH_SIZE: usize = 2_000;

/// Plan metadata as stored.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PlanRecord {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// A plan together with its points in ascending `seq` order.
#[derive(Debug, Clone)]
pub struct StoredPlan {
    pub record: PlanRecord,
    pub points: Vec<PlanPoint>,
}

/// Handle to the plan database. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PlanStore {
    pool: SqlitePool,
}

impl PlanStore {
    /// Open (creating if needed) the database at `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), ApiError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Store a plan and its ordered points, returning the new plan id.
    ///
    /// Points receive zero-based `seq` values in slice order. Everything is
    /// written in a single transaction.
    pub async fn create_plan(&self, name: &str, points: &[Point2D]) -> Result<i64, ApiError> {
        let mut tx = self.pool.begin().await?;

        let plan_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO plans (name)
            VALUES (?)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        for (batch, chunk) in points.chunks(BATCH_SIZE).enumerate() {
            let offset = batch * BATCH_SIZE;
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("INSERT INTO plan_points (plan_id, seq, x, y) ");
            builder.push_values(chunk.iter().enumerate(), |mut row, (i, p)| {
                row.push_bind(plan_id)
                    .push_bind((offset + i) as i64)
                    .push_bind(p.x)
                    .push_bind(p.y);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::debug!(plan_id, name, points = points.len(), "Stored plan");

        Ok(plan_id)
    }

    /// Fetch a plan by id. `None` when no such plan exists.
    pub async fn get_plan(&self, plan_id: i64) -> Result<Option<StoredPlan>, ApiError> {
        let record = sqlx::query_as::<_, PlanRecord>(
            r#"
            SELECT id, name, created_at
            FROM plans
            WHERE id = ?
            "#,
        )
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(record) = record else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, (i64, f64, f64)>(
            r#"
            SELECT seq, x, y
            FROM plan_points
            WHERE plan_id = ?
            ORDER BY seq
            "#,
        )
        .bind(plan_id)
        .fetch_all(&self.pool)
        .await?;

        let points = rows
            .into_iter()
            .map(|(seq, x, y)| PlanPoint { seq, x, y })
            .collect();

        Ok(Some(StoredPlan { record, points }))
    }
}
