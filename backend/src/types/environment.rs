//! Environment configuration for different deployment stages

use std::env;
use std::net::Ipv4Addr;

use tracing::Level;

/// Port the original deployment listens on
const DEFAULT_PORT: u16 = 5000;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Development environment (verbose logging, loopback bind, not for
    /// externally-facing deployment)
    Development {
        /// Optional override for the listen port
        port_override: Option<u16>,
    },
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "development" => {
                // Check for a listen port override
                let port_override = env::var("PORT").ok().and_then(|val| val.parse::<u16>().ok());

                Self::Development { port_override }
            }
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Port the server listens on
    #[must_use]
    pub fn port(&self) -> u16 {
        match self {
            Self::Production => DEFAULT_PORT,
            Self::Development { port_override } => port_override.unwrap_or(DEFAULT_PORT),
        }
    }

    /// Host to bind: loopback in development, all interfaces in production
    #[must_use]
    pub const fn bind_host(&self) -> Ipv4Addr {
        match self {
            Self::Production => Ipv4Addr::UNSPECIFIED,
            Self::Development { .. } => Ipv4Addr::LOCALHOST,
        }
    }

    /// Log verbosity for the environment, overridable via `TRACING_LEVEL`
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production => Level::INFO,
                Self::Development { .. } => Level::DEBUG,
            })
    }
}
