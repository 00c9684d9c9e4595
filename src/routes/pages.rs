// backend/src/routes/pages.rs

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{pages::{self, Navigation}, AppState};
use super::internal_error;

fn respond(nav: Navigation) -> Response {
    match nav {
        Navigation::Redirect(url) => Redirect::temporary(&url).into_response(),
        Navigation::Render(page) => {
            tracing::debug!(component = page.component, action = page.action, "render page");
            match pages::render_shell(&page) {
                Ok(html) => Html(html).into_response(),
                Err(e) => internal_error(e).into_response(),
            }
        }
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

pub async fn home(State(state): State<AppState>) -> Response {
    respond(pages::home(&state.season))
}

pub async fn signup_index(State(state): State<AppState>) -> Response {
    respond(pages::signup_index(&state.season))
}

pub async fn signup(State(state): State<AppState>, Path(year): Path<String>) -> Response {
    respond(pages::signup(&state.season, &state.site_name, &year))
}

pub async fn stats_index(State(state): State<AppState>) -> Response {
    respond(pages::stats_index(&state.season, today()))
}

pub async fn stats(
    State(state): State<AppState>,
    Path((year, day)): Path<(String, String)>,
) -> Response {
    respond(pages::stats(&state.season, &state.site_name, &year, &day))
}

pub async fn finish_strong_index(State(state): State<AppState>) -> Response {
    respond(pages::finish_strong_index(&state.season))
}

pub async fn finish_strong(State(state): State<AppState>, Path(year): Path<String>) -> Response {
    respond(pages::finish_strong(&state.season, &state.site_name, &year))
}
