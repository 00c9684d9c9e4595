// backend/src/config/mod.rs

use std::env;

use anyhow::{anyhow, bail, Context};

/// Challenge calendar the page routes are driven by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub target_year: i32,
    pub target_month: u32,
    pub is_year_closed: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub season: Season,
    pub site_name: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;

        let target_year: i32 = required(&lookup, "TARGET_YEAR")?;
        let target_month: u32 = required(&lookup, "TARGET_MONTH")?;
        if !(1..=12).contains(&target_month) {
            bail!("TARGET_MONTH must be between 1 and 12, got {target_month}");
        }

        let is_year_closed = match lookup("IS_YEAR_CLOSED") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow!("IS_YEAR_CLOSED is not a boolean: '{raw}'"))?,
            None => false,
        };

        Ok(Self {
            database_url,
            port,
            max_connections,
            season: Season { target_year, target_month, is_year_closed },
            site_name: lookup("SITE_NAME").unwrap_or_else(|| "Pullups".into()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "dist".into()),
        })
    }
}

fn required<T, F>(lookup: &F, key: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).ok_or_else(|| anyhow!("{key} must be set"))?;
    raw.trim()
        .parse()
        .with_context(|| format!("invalid {key}: '{raw}'"))
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: '{raw}'")),
        None => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
