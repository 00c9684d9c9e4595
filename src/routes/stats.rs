// backend/src/routes/stats.rs

use axum::{extract::{Path, State}, Json};
use axum::http::StatusCode;
use serde::Deserialize;
use sqlx::{query_as, query_scalar};

use crate::{AppState, models::{GlobalStats, PaxCount, PaxStats, RegionStats}};
use super::internal_error;

/// `/api/stats/:year/:month/:day/...`
///
/// Segments are only checked for being integers. Out-of-range values are
/// passed through, so day 40 covers the whole month.
#[derive(Debug, Deserialize)]
pub struct StatsDay {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

// ─────────────────────────────────────────────────────────────────────────────
// SQL
// ─────────────────────────────────────────────────────────────────────────────

const SQL_GLOBAL_CUMULATIVE: &str = r#"
SELECT COALESCE(SUM(count), 0)::bigint
FROM public.burpees
WHERE date_part('year', date)::int = $1
  AND date_part('month', date)::int = $2
  AND date_part('day', date)::int <= $3
"#;

const SQL_GLOBAL_DAILY: &str = r#"
SELECT COALESCE(SUM(count), 0)::bigint
FROM public.burpees
WHERE date_part('year', date)::int = $1
  AND date_part('month', date)::int = $2
  AND date_part('day', date)::int = $3
"#;

const SQL_TOP_REGIONS: &str = r#"
SELECT h.region,
       SUM(b1.cumulative_burpee_count)::bigint           AS cumulative_burpee_count,
       COALESCE(SUM(b2.daily_burpee_count), 0)::bigint   AS daily_burpee_count
FROM public.hims AS h
JOIN (
    SELECT him_id, SUM(count) AS cumulative_burpee_count
    FROM public.burpees
    WHERE date_part('year', date)::int = $1
      AND date_part('month', date)::int = $2
      AND date_part('day', date)::int <= $3
    GROUP BY him_id
) AS b1 ON b1.him_id = h.him_id
LEFT OUTER JOIN (
    SELECT him_id, SUM(count) AS daily_burpee_count
    FROM public.burpees
    WHERE date_part('year', date)::int = $1
      AND date_part('month', date)::int = $2
      AND date_part('day', date)::int = $3
    GROUP BY him_id
) AS b2 ON b2.him_id = h.him_id
GROUP BY h.region
ORDER BY cumulative_burpee_count DESC, h.region
LIMIT 10
"#;

const SQL_TOP_PAX: &str = r#"
SELECT h.region,
       h.f3_name                          AS him,
       b1.cumulative_burpee_count::bigint AS count
FROM public.hims AS h
JOIN (
    SELECT him_id, SUM(count) AS cumulative_burpee_count
    FROM public.burpees
    WHERE date_part('year', date)::int = $1
      AND date_part('month', date)::int = $2
      AND date_part('day', date)::int <= $3
    GROUP BY him_id
) AS b1 ON b1.him_id = h.him_id
ORDER BY count DESC, him
LIMIT 10
"#;

const SQL_DAILY_PAX: &str = r#"
SELECT h.region,
       h.f3_name                     AS him,
       b2.daily_burpee_count::bigint AS count
FROM public.hims AS h
JOIN (
    SELECT him_id, SUM(count) AS daily_burpee_count
    FROM public.burpees
    WHERE date_part('year', date)::int = $1
      AND date_part('month', date)::int = $2
      AND date_part('day', date)::int = $3
    GROUP BY him_id
) AS b2 ON b2.him_id = h.him_id
ORDER BY count DESC, him
LIMIT 10
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /api/stats/:year/:month/:day/global
pub async fn get_global_stats(
    State(state): State<AppState>,
    Path(d): Path<StatsDay>,
) -> Result<Json<GlobalStats>, (StatusCode, String)> {
    let mut conn = state.pool.acquire().await.map_err(internal_error)?;

    let cumulative_burpee_count = query_scalar::<_, i64>(SQL_GLOBAL_CUMULATIVE)
        .bind(d.year).bind(d.month).bind(d.day)
        .fetch_one(&mut *conn).await.map_err(internal_error)?;

    let daily_burpee_count = query_scalar::<_, i64>(SQL_GLOBAL_DAILY)
        .bind(d.year).bind(d.month).bind(d.day)
        .fetch_one(&mut *conn).await.map_err(internal_error)?;

    tracing::debug!(?d, cumulative_burpee_count, daily_burpee_count, "global stats");
    Ok(Json(GlobalStats { cumulative_burpee_count, daily_burpee_count }))
}

/// GET /api/stats/:year/:month/:day/regions
pub async fn get_top_region_stats(
    State(state): State<AppState>,
    Path(d): Path<StatsDay>,
) -> Result<Json<Vec<RegionStats>>, (StatusCode, String)> {
    let mut conn = state.pool.acquire().await.map_err(internal_error)?;

    let rows = query_as::<_, RegionStats>(SQL_TOP_REGIONS)
        .bind(d.year).bind(d.month).bind(d.day)
        .fetch_all(&mut *conn).await.map_err(internal_error)?;

    Ok(Json(rows))
}

/// GET /api/stats/:year/:month/:day/pax
pub async fn get_pax_stats(
    State(state): State<AppState>,
    Path(d): Path<StatsDay>,
) -> Result<Json<PaxStats>, (StatusCode, String)> {
    let mut conn = state.pool.acquire().await.map_err(internal_error)?;

    let top = query_as::<_, PaxCount>(SQL_TOP_PAX)
        .bind(d.year).bind(d.month).bind(d.day)
        .fetch_all(&mut *conn).await.map_err(internal_error)?;

    let daily = query_as::<_, PaxCount>(SQL_DAILY_PAX)
        .bind(d.year).bind(d.month).bind(d.day)
        .fetch_all(&mut *conn).await.map_err(internal_error)?;

    Ok(Json(PaxStats { top, daily }))
}
