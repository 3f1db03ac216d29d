use std::env;
use std::fmt;
use std::path::PathBuf;

const LOG_LEVEL_VAR: &str = "REIMBURSEMENT_LOG_LEVEL";
const RULES_VAR: &str = "REIMBURSEMENT_RULES";
const EXACT_TOLERANCE_VAR: &str = "REIMBURSEMENT_EXACT_TOLERANCE";
const CLOSE_TOLERANCE_VAR: &str = "REIMBURSEMENT_CLOSE_TOLERANCE";

/// Top-level configuration for the calculator.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub rules: RulesConfig,
    pub batch: BatchConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "warn".to_string());

        let path = env::var(RULES_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let defaults = BatchConfig::default();
        let exact_tolerance = tolerance_var(EXACT_TOLERANCE_VAR, defaults.exact_tolerance)?;
        let close_tolerance = tolerance_var(CLOSE_TOLERANCE_VAR, defaults.close_tolerance)?;
        if exact_tolerance > close_tolerance {
            return Err(ConfigError::ToleranceOrder {
                exact: exact_tolerance,
                close: close_tolerance,
            });
        }

        Ok(Self {
            rules: RulesConfig { path },
            batch: BatchConfig {
                exact_tolerance,
                close_tolerance,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn tolerance_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidTolerance { name, value: raw }),
    }
}

/// Which rule table the evaluator walks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesConfig {
    /// JSON rule table replacing the built-in one.
    pub path: Option<PathBuf>,
}

/// Match thresholds used when scoring a case file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchConfig {
    pub exact_tolerance: f64,
    pub close_tolerance: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            exact_tolerance: 0.01,
            close_tolerance: 1.0,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTolerance { name: &'static str, value: String },
    ToleranceOrder { exact: f64, close: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance { name, value } => {
                write!(f, "{name} must be a positive number, got '{value}'")
            }
            ConfigError::ToleranceOrder { exact, close } => write!(
                f,
                "{EXACT_TOLERANCE_VAR} ({exact}) must not exceed {CLOSE_TOLERANCE_VAR} ({close})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
