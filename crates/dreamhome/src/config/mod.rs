use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the portal's loan service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub loans: LoanDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = LogFormat::from_str(
            &env::var("APP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        );

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level, format },
            loans: LoanDefaults::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Values used to preset the calculator when it is opened from a property page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanDefaults {
    pub rate_percent: f64,
    pub tenure_years: u32,
    pub down_payment_share: f64,
}

impl Default for LoanDefaults {
    fn default() -> Self {
        Self {
            rate_percent: 8.5,
            tenure_years: 20,
            down_payment_share: 0.2,
        }
    }
}

impl LoanDefaults {
    fn from_env() -> Result<Self, ConfigError> {
        let fallback = Self::default();

        let rate_percent = match env::var("LOAN_DEFAULT_RATE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|rate| rate.is_finite() && *rate > 0.0)
                .ok_or(ConfigError::InvalidLoanDefault {
                    variable: "LOAN_DEFAULT_RATE",
                })?,
            Err(_) => fallback.rate_percent,
        };

        let tenure_years = match env::var("LOAN_DEFAULT_TENURE_YEARS") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|years| *years > 0)
                .ok_or(ConfigError::InvalidLoanDefault {
                    variable: "LOAN_DEFAULT_TENURE_YEARS",
                })?,
            Err(_) => fallback.tenure_years,
        };

        let down_payment_share = match env::var("LOAN_DEFAULT_DOWN_PAYMENT_SHARE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|share| (0.0..1.0).contains(share))
                .ok_or(ConfigError::InvalidLoanDefault {
                    variable: "LOAN_DEFAULT_DOWN_PAYMENT_SHARE",
                })?,
            Err(_) => fallback.down_payment_share,
        };

        Ok(Self {
            rate_percent,
            tenure_years,
            down_payment_share,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLoanDefault { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLoanDefault { variable } => {
                write!(f, "{variable} is out of range for a loan default")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidLoanDefault { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_LOG_FORMAT",
            "LOAN_DEFAULT_RATE",
            "LOAN_DEFAULT_TENURE_YEARS",
            "LOAN_DEFAULT_DOWN_PAYMENT_SHARE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.format, LogFormat::Compact);
        assert_eq!(config.loans, LoanDefaults::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn reads_loan_defaults_and_json_logging() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("APP_LOG_FORMAT", "JSON");
        env::set_var("LOAN_DEFAULT_RATE", "9.1");
        env::set_var("LOAN_DEFAULT_TENURE_YEARS", "15");
        env::set_var("LOAN_DEFAULT_DOWN_PAYMENT_SHARE", "0.25");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.format, LogFormat::Json);
        assert_eq!(config.loans.tenure_years, 15);
        assert!((config.loans.rate_percent - 9.1).abs() < f64::EPSILON);
        assert!((config.loans.down_payment_share - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_down_payment_share_of_one() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LOAN_DEFAULT_DOWN_PAYMENT_SHARE", "1.0");

        let result = AppConfig::load();
        reset_env();

        match result {
            Err(ConfigError::InvalidLoanDefault { variable }) => {
                assert_eq!(variable, "LOAN_DEFAULT_DOWN_PAYMENT_SHARE")
            }
            other => panic!("expected invalid loan default, got {other:?}"),
        }
    }
}
