use anyhow::{Context, Result};

pub const BACKEND_URL_VAR: &str = "GRADEFLOW_BACKEND_URL";
pub const BACKEND_KEY_VAR: &str = "GRADEFLOW_BACKEND_KEY";
pub const TZ_OFFSET_VAR: &str = "GRADEFLOW_TZ_OFFSET_MINUTES";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";

/// Connection settings for the hosted backend plus the report timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    /// Anonymous client key; empty in local development.
    pub key: String,
    /// Minutes east of UTC used to interpret report dates.
    pub tz_offset_minutes: i32,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(BACKEND_URL_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let key = lookup(BACKEND_KEY_VAR).unwrap_or_else(|| {
            tracing::warn!("{BACKEND_KEY_VAR} not set; using empty dev key");
            String::new()
        });

        let tz_offset_minutes = match lookup(TZ_OFFSET_VAR) {
            Some(raw) => parse_offset(&raw)
                .with_context(|| format!("invalid {TZ_OFFSET_VAR} value '{raw}'"))?,
            None => 0,
        };

        Ok(Self {
            url,
            key,
            tz_offset_minutes,
        })
    }
}

fn parse_offset(raw: &str) -> Result<i32> {
    let minutes: i32 = raw.trim().parse()?;
    // chrono::FixedOffset accepts strictly less than one day.
    anyhow::ensure!(minutes.abs() < 24 * 60, "offset must be within ±23:59");
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<BackendConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BackendConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.url, DEFAULT_BACKEND_URL);
        assert_eq!(cfg.key, "");
        assert_eq!(cfg.tz_offset_minutes, 0);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            (BACKEND_URL_VAR, " https://db.example.com/ "),
            (BACKEND_KEY_VAR, "anon-key"),
            (TZ_OFFSET_VAR, "-180"),
        ])
        .unwrap();
        assert_eq!(cfg.url, "https://db.example.com");
        assert_eq!(cfg.key, "anon-key");
        assert_eq!(cfg.tz_offset_minutes, -180);
    }

    #[test]
    fn rejects_bad_offsets() {
        assert!(config(&[(TZ_OFFSET_VAR, "abc")]).is_err());
        assert!(config(&[(TZ_OFFSET_VAR, "1440")]).is_err());
    }
}
