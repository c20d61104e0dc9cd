use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use seethio_core::{ExhaustionPolicy, PlannerConfig, DEFAULT_MAX_TRIP_DAYS};

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5500";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub catalog_path: Option<PathBuf>,
    pub planner: PlannerConfig,
    pub max_body_bytes: usize,
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            catalog_path: None,
            planner: PlannerConfig::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let exhaustion = match value("SEETHIO_EXHAUSTION_POLICY") {
            Some(raw) => match ExhaustionPolicy::parse(&raw) {
                Some(policy) => policy,
                None => bail!("SEETHIO_EXHAUSTION_POLICY must be 'recycle' or 'fail', got '{raw}'"),
            },
            None => ExhaustionPolicy::default(),
        };

        let max_trip_days = value("SEETHIO_MAX_TRIP_DAYS")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_MAX_TRIP_DAYS);

        let max_body_bytes = value("SEETHIO_MAX_BODY_BYTES")
            .and_then(|raw| raw.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        let allowed_origins = value("SEETHIO_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().trim_end_matches('/').to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);

        Ok(Self {
            bind: value("SEETHIO_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            catalog_path: value("SEETHIO_CATALOG_PATH").map(PathBuf::from),
            planner: PlannerConfig {
                exhaustion,
                max_trip_days,
            },
            max_body_bytes,
            allowed_origins,
        })
    }
}
