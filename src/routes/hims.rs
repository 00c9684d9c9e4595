// backend/src/routes/hims.rs

use axum::{extract::{Path, Query, State}, Json};
use axum::http::StatusCode;
use serde::Deserialize;
use sqlx::query_as;

use crate::{AppState, models::Him};
use super::{bad_request, internal_error, not_found};

#[derive(Deserialize)]
pub struct CreateHimBody {
    pub f3_name: String,
    pub region: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct ListHimsQ {
    pub region: Option<String>,
}

impl CreateHimBody {
    /// Trims the text fields and rejects blank names or regions.
    fn normalized(self) -> Result<Self, String> {
        let f3_name = self.f3_name.trim().to_string();
        let region = self.region.trim().to_string();
        if f3_name.is_empty() {
            return Err("f3_name must not be empty".into());
        }
        if region.is_empty() {
            return Err("region must not be empty".into());
        }
        let email = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        Ok(Self { f3_name, region, email })
    }
}

/// POST /api/hims
pub async fn create_him(
    State(state): State<AppState>,
    Json(b): Json<CreateHimBody>,
) -> Result<Json<Him>, (StatusCode, String)> {
    let b = b.normalized().map_err(bad_request)?;
    let row = query_as::<_, Him>(
        r#"
        INSERT INTO public.hims(f3_name, region, email)
        VALUES ($1,$2,$3)
        RETURNING him_id, f3_name, region, email, created_at
        "#
    )
    .bind(&b.f3_name).bind(&b.region).bind(&b.email)
    .fetch_one(&state.pool).await.map_err(internal_error)?;

    tracing::info!(him_id = row.him_id, region = %row.region, "him signed up");
    Ok(Json(row))
}

/// GET /api/hims
pub async fn list_hims(
    State(state): State<AppState>,
    Query(q): Query<ListHimsQ>,
) -> Result<Json<Vec<Him>>, (StatusCode, String)> {
    let rows = if let Some(region) = q.region {
        query_as::<_, Him>(r#"SELECT him_id, f3_name, region, email, created_at FROM public.hims WHERE region=$1 ORDER BY f3_name"#)
            .bind(region)
            .fetch_all(&state.pool).await.map_err(internal_error)?
    } else {
        query_as::<_, Him>(r#"SELECT him_id, f3_name, region, email, created_at FROM public.hims ORDER BY f3_name"#)
            .fetch_all(&state.pool).await.map_err(internal_error)?
    };
    Ok(Json(rows))
}

/// GET /api/hims/:him_id
pub async fn get_him(
    State(state): State<AppState>,
    Path(him_id): Path<i64>,
) -> Result<Json<Him>, (StatusCode, String)> {
    query_as::<_, Him>(r#"SELECT him_id, f3_name, region, email, created_at FROM public.hims WHERE him_id=$1"#)
        .bind(him_id)
        .fetch_optional(&state.pool).await.map_err(internal_error)?
        .map(Json)
        .ok_or_else(|| not_found(format!("him {him_id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str, region: &str, email: Option<&str>) -> CreateHimBody {
        CreateHimBody {
            f3_name: name.into(),
            region: region.into(),
            email: email.map(Into::into),
        }
    }

    #[test]
    fn normalizes_whitespace_and_blank_email() {
        let b = body("  Mayhem ", " Lowcountry", Some("   ")).normalized().unwrap();
        assert_eq!(b.f3_name, "Mayhem");
        assert_eq!(b.region, "Lowcountry");
        assert_eq!(b.email, None);
    }

    #[test]
    fn blank_name_or_region_is_rejected() {
        assert!(body(" ", "Lowcountry", None).normalized().is_err());
        assert!(body("Mayhem", "", None).normalized().is_err());
    }

    mod http {
        use axum::http::{Method, StatusCode};
        use sqlx::PgPool;

        use crate::routes::test_support::{app_with, body_json, get, seed_him, send};

        #[sqlx::test(migrations = "./migrations")]
        async fn signup_trims_and_persists(pool: PgPool) {
            let resp = send(
                app_with(pool.clone(), false),
                Method::POST,
                "/api/hims",
                Some(r#"{"f3_name":" Mayhem ","region":"Lowcountry","email":""}"#),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);
            let created = body_json(resp).await;
            assert_eq!(created["f3_name"], "Mayhem");
            assert_eq!(created["email"], serde_json::Value::Null);

            let id = created["him_id"].as_i64().unwrap();
            let resp = get(app_with(pool, false), &format!("/api/hims/{id}")).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(body_json(resp).await["region"], "Lowcountry");
        }

        #[sqlx::test(migrations = "./migrations")]
        async fn unknown_him_is_404(pool: PgPool) {
            let resp = get(app_with(pool, false), "/api/hims/4242").await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }

        #[sqlx::test(migrations = "./migrations")]
        async fn list_filters_by_region(pool: PgPool) {
            seed_him(&pool, "Zed", "Coastal").await;
            seed_him(&pool, "Abe", "Coastal").await;
            seed_him(&pool, "Moe", "Midlands").await;

            let names = |v: serde_json::Value| -> Vec<String> {
                v.as_array()
                    .unwrap()
                    .iter()
                    .map(|h| h["f3_name"].as_str().unwrap().to_string())
                    .collect()
            };

            let all = body_json(get(app_with(pool.clone(), false), "/api/hims").await).await;
            assert_eq!(names(all), ["Abe", "Moe", "Zed"]);

            let coastal = body_json(get(app_with(pool, false), "/api/hims?region=Coastal").await).await;
            assert_eq!(names(coastal), ["Abe", "Zed"]);
        }
    }
}
