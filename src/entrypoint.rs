//! Standardized initialization for the lambda binary. This keeps the tracing
//! configuration consistent with how the deployed environments ingest logs.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// The current environment the handler is running in
#[derive(Debug, Clone, Copy)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The handler is running on localhost
    Local,
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error)]
#[error("could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl Environment {
    /// Reads the `ENVIRONMENT` variable, falling back to production if it is
    /// unset or unrecognized.
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|v| Self::from_str(&v).ok())
            .unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}

/// unit struct which defines the behaviour for instantiation
#[derive(Debug)]
pub struct Entrypoint {
    env: Environment,
}

impl Default for Entrypoint {
    fn default() -> Self {
        Entrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// sentinel struct which guarantees that we called [Entrypoint::init]
#[derive(Debug)]
pub struct InitializedEntrypoint(());

impl Entrypoint {
    /// consume self, initialize this binary, and return a proof that it was
    /// initialized [InitializedEntrypoint]
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        InitializedEntrypoint(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_known_values() {
        assert!(matches!(
            Environment::from_str("prod"),
            Ok(Environment::Production)
        ));
        assert!(matches!(
            Environment::from_str("dev"),
            Ok(Environment::Develop)
        ));
        assert!(matches!(
            Environment::from_str("local"),
            Ok(Environment::Local)
        ));
        assert!(Environment::from_str("staging").is_err());
    }
}
