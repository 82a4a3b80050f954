//! Engine configuration, read from `CROSSSELL_*` environment variables.

use std::time::Duration;

use crate::domain::error::DomainError;
use crate::domain::values::opportunity_score::OpportunityScore;
use crate::domain::values::relationship_mode::RelationshipMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub db_path: String,
    pub bind_address: String,
    pub query_timeout: Duration,
    pub relationship: RelationshipMode,
    /// Points awarded by the fixed relationship signal.
    pub relationship_points: f64,
    pub high_opportunity_threshold: OpportunityScore,
    pub log_format: LogFormat,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: "./crosssell.db".into(),
            bind_address: "127.0.0.1:8080".into(),
            query_timeout: Duration::from_millis(5000),
            relationship: RelationshipMode::Fixed,
            relationship_points: 10.0,
            high_opportunity_threshold: OpportunityScore::from_raw(70.0),
            log_format: LogFormat::Compact,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("CROSSSELL_DB") {
            config.db_path = path;
        }
        if let Some(bind) = lookup("CROSSSELL_BIND") {
            config.bind_address = bind;
        }
        if let Some(raw) = lookup("CROSSSELL_QUERY_TIMEOUT_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| invalid("CROSSSELL_QUERY_TIMEOUT_MS", &raw, "expected a positive integer"))?;
            config.query_timeout = Duration::from_millis(ms);
        }
        if let Some(raw) = lookup("CROSSSELL_RELATIONSHIP") {
            config.relationship = raw
                .parse()
                .map_err(|e: String| invalid("CROSSSELL_RELATIONSHIP", &raw, &e))?;
        }
        if let Some(raw) = lookup("CROSSSELL_RELATIONSHIP_POINTS") {
            let points: f64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|p: &f64| (0.0..=20.0).contains(p))
                .ok_or_else(|| invalid("CROSSSELL_RELATIONSHIP_POINTS", &raw, "expected a number between 0 and 20"))?;
            config.relationship_points = points;
        }
        if let Some(raw) = lookup("CROSSSELL_HIGH_OPPORTUNITY_MIN") {
            config.high_opportunity_threshold = raw
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(|v| OpportunityScore::new(v).ok())
                .ok_or_else(|| invalid("CROSSSELL_HIGH_OPPORTUNITY_MIN", &raw, "expected an integer between 0 and 100"))?;
        }
        if let Some(raw) = lookup("CROSSSELL_LOG_FORMAT") {
            config.log_format = match raw.trim().to_lowercase().as_str() {
                "compact" => LogFormat::Compact,
                "json" => LogFormat::Json,
                _ => return Err(invalid("CROSSSELL_LOG_FORMAT", &raw, "expected compact or json")),
            };
        }

        Ok(config)
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> DomainError {
    DomainError::Config(format!("{key}={value:?}: {reason}"))
}
