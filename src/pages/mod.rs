// backend/src/pages/mod.rs
//
// Navigation rules for the single-page app. Every route resolves to either a
// redirect or a page render carrying the store action the client runs before
// it shows the page.

use askama::Template;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Season;

/// Day shown once the season is over.
pub const FINAL_DAY: u32 = 28;

/// Script the shell loads; served out of `STATIC_DIR`.
pub const APP_BUNDLE: &str = "/app.js";

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Redirect(String),
    Render(Page),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub component: &'static str,
    pub title: String,
    pub action: &'static str,
    pub payload: Value,
}

/// `/`
pub fn home(season: &Season) -> Navigation {
    Navigation::Redirect(format!("/signup/{}", season.target_year))
}

/// `/signup`
pub fn signup_index(season: &Season) -> Navigation {
    Navigation::Redirect(format!("/signup/{}", season.target_year))
}

/// `/signup/:year`
pub fn signup(season: &Season, site: &str, year: &str) -> Navigation {
    if season.is_year_closed {
        return Navigation::Redirect("/finish-strong".into());
    }
    Navigation::Render(Page {
        component: "SignupPage",
        title: format!("{site} - Signup - {year}"),
        action: "signupPage/initializeStore",
        payload: json!({ "year": year }),
    })
}

/// `/stats`: today while the challenge month is running, otherwise the
/// first day (open season) or the final day (closed season).
pub fn stats_index(season: &Season, today: NaiveDate) -> Navigation {
    let year = season.target_year;
    let url = if today.year() == year && today.month() == season.target_month {
        format!("/stats/{year}/{:02}", today.day())
    } else if season.is_year_closed {
        format!("/stats/{year}/{FINAL_DAY}")
    } else {
        format!("/stats/{year}/01")
    };
    Navigation::Redirect(url)
}

/// `/stats/:year/:day`
pub fn stats(season: &Season, site: &str, year: &str, day: &str) -> Navigation {
    Navigation::Render(Page {
        component: "StatsPage",
        title: format!("{site} - Stats - {year}"),
        action: "statsPage/initializeStore",
        payload: json!({ "year": year, "month": season.target_month, "day": day }),
    })
}

/// `/finish-strong`
pub fn finish_strong_index(season: &Season) -> Navigation {
    Navigation::Redirect(format!("/finish-strong/{}", season.target_year))
}

/// `/finish-strong/:year`
pub fn finish_strong(season: &Season, site: &str, year: &str) -> Navigation {
    if !season.is_year_closed {
        return Navigation::Redirect("/".into());
    }
    Navigation::Render(Page {
        component: "FinishStrong",
        title: format!("{site} - Finish Strong - {year}"),
        action: "finishStrongPage/initializeStore",
        payload: json!({ "year": year, "day": FINAL_DAY }),
    })
}

/// HTML shell handed to the browser for a rendered page.
#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    title: &'a str,
    state: Value,
    bundle: &'a str,
}

pub fn render_shell(page: &Page) -> askama::Result<String> {
    ShellTemplate {
        title: &page.title,
        state: json!({
            "component": page.component,
            "action": page.action,
            "payload": page.payload,
        }),
        bundle: APP_BUNDLE,
    }
    .render()
}
