// backend/src/routes/burpees.rs

use axum::{extract::{Path, Query, State}, Json};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::{query_as, query_scalar};

use crate::{AppState, models::BurpeeEntry};
use super::{bad_request, internal_error, not_found};

#[derive(Deserialize)]
pub struct LogBurpeesBody {
    pub count: i32,
}

#[derive(Deserialize)]
pub struct ListEntriesQ {
    pub year: Option<i32>,
    pub month: Option<i32>,
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", s, e))
}

async fn ensure_him(state: &AppState, him_id: i64) -> Result<(), (StatusCode, String)> {
    let exists = query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM public.hims WHERE him_id=$1)"#)
        .bind(him_id)
        .fetch_one(&state.pool).await.map_err(internal_error)?;
    if exists {
        Ok(())
    } else {
        Err(not_found(format!("him {him_id} not found")))
    }
}

// 23503 = foreign_key_violation: the him does not exist (or was just deleted)
fn upsert_error(e: sqlx::Error, him_id: i64) -> (StatusCode, String) {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23503") {
            return not_found(format!("him {him_id} not found"));
        }
    }
    internal_error(e)
}

/// PUT /api/hims/:him_id/burpees/:date
pub async fn log_burpees(
    State(state): State<AppState>,
    Path((him_id, date)): Path<(i64, String)>,
    Json(b): Json<LogBurpeesBody>,
) -> Result<Json<BurpeeEntry>, (StatusCode, String)> {
    let day = parse_day(&date).map_err(bad_request)?;
    if b.count < 0 {
        return Err(bad_request("count must be >= 0"));
    }

    let row = query_as::<_, BurpeeEntry>(
        r#"
        INSERT INTO public.burpees(him_id, date, count)
        VALUES ($1,$2,$3)
        ON CONFLICT (him_id, date)
        DO UPDATE SET count = EXCLUDED.count,
                      updated_at = now()
        RETURNING burpee_id, him_id, date, count, updated_at
        "#
    )
    .bind(him_id).bind(day).bind(b.count)
    .fetch_one(&state.pool).await.map_err(|e| upsert_error(e, him_id))?;

    tracing::info!(him_id, %day, count = row.count, "burpees logged");
    Ok(Json(row))
}

/// GET /api/hims/:him_id/burpees
pub async fn list_entries(
    State(state): State<AppState>,
    Path(him_id): Path<i64>,
    Query(q): Query<ListEntriesQ>,
) -> Result<Json<Vec<BurpeeEntry>>, (StatusCode, String)> {
    ensure_him(&state, him_id).await?;

    // NULL filters match everything
    let rows = query_as::<_, BurpeeEntry>(
        r#"
        SELECT burpee_id, him_id, date, count, updated_at
        FROM public.burpees
        WHERE him_id = $1
          AND ($2::int IS NULL OR date_part('year', date)::int = $2)
          AND ($3::int IS NULL OR date_part('month', date)::int = $3)
        ORDER BY date
        "#
    )
    .bind(him_id).bind(q.year).bind(q.month)
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}
