use crate::entitlement::{EntitlementRule, SummaryTemplate};
use std::env;
use std::fmt;

/// Issuing unit stamped on technical note numbers unless overridden.
pub const DEFAULT_ISSUING_UNIT: &str = "DDVP/DRH/PCPA";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub engine: EngineConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let rule = match env::var("RECESSO_ENTITLEMENT_RULE") {
            Ok(raw) => EntitlementRule::parse(&raw).ok_or(ConfigError::InvalidRule(raw))?,
            Err(_) => EntitlementRule::CalendarDays,
        };

        let template = match env::var("RECESSO_SUMMARY_TEMPLATE") {
            Ok(raw) => SummaryTemplate::parse(&raw).ok_or(ConfigError::InvalidTemplate(raw))?,
            Err(_) => SummaryTemplate::Detailed,
        };

        let issuing_unit = match env::var("RECESSO_ISSUING_UNIT") {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => Some(raw.trim().to_string()),
            Err(_) => Some(DEFAULT_ISSUING_UNIT.to_string()),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            engine: EngineConfig {
                rule,
                template,
                issuing_unit,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Defaults handed to the engine when the caller does not pick explicitly.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub rule: EntitlementRule,
    pub template: SummaryTemplate,
    /// `None` when the unit suffix is disabled (empty `RECESSO_ISSUING_UNIT`).
    pub issuing_unit: Option<String>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRule(String),
    InvalidTemplate(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRule(value) => write!(
                f,
                "RECESSO_ENTITLEMENT_RULE must be 'calendar-days' or 'legacy-months' (found '{}')",
                value
            ),
            ConfigError::InvalidTemplate(value) => write!(
                f,
                "RECESSO_SUMMARY_TEMPLATE must be 'detailed' or 'compact' (found '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
