//! Configuration module for Academy CMS.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Minimum byte length accepted for the JWT signing secret.
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub gate: GateConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared signing secret for access tokens. Must be set; the process
    /// refuses to start without it rather than falling back to a default.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token issuer claim.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
    /// Token validity in hours.
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
    /// Name of the cookie slot the gate reads the token from.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Email of the admin principal seeded at startup (if absent from the store).
    #[serde(default)]
    pub admin_email: Option<String>,
    /// Argon2id PHC hash of the seeded admin's password. Plaintext passwords
    /// are never configured or stored.
    #[serde(default)]
    pub admin_password_hash: Option<String>,
}

/// Protected-path configuration for the edge gate.
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Root prefix under which every path requires a valid token.
    #[serde(default = "default_admin_root")]
    pub admin_root: String,
    /// Login carve-out inside the protected root. Defaults to
    /// `{admin_root}/login`.
    #[serde(default)]
    pub login_path: Option<String>,
}

impl GateConfig {
    /// Resolve the exempt login path.
    pub fn login_path(&self) -> String {
        self.login_path
            .clone()
            .unwrap_or_else(|| format!("{}/login", self.admin_root))
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            admin_root: default_admin_root(),
            login_path: None,
        }
    }
}

fn default_issuer() -> String {
    "academy-cms".to_string()
}

fn default_token_ttl_hours() -> i64 {
    24
}

fn default_cookie_name() -> String {
    "admin_token".to_string()
}

fn default_admin_root() -> String {
    "/admin".to_string()
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (ACADEMY_*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(false))
            // Layer on local overrides
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables with ACADEMY_ prefix
            .add_source(
                Environment::with_prefix("ACADEMY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate settings that must hold before the server binds a socket.
    ///
    /// The signing secret in particular has no fallback: starting without one
    /// would leave every protected route either open or permanently denied.
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.jwt_secret.is_empty() {
            return Err(
                "auth.jwt_secret is not configured; refusing to start".to_string(),
            );
        }
        if self.auth.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(format!(
                "auth.jwt_secret must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            ));
        }
        if self.auth.token_ttl_hours <= 0 {
            return Err("auth.token_ttl_hours must be positive".to_string());
        }
        let root = &self.gate.admin_root;
        if !root.starts_with('/') || root.len() < 2 || root.ends_with('/') {
            return Err(format!(
                "gate.admin_root '{}' must start with '/' and carry no trailing slash",
                root
            ));
        }
        if !self.gate.login_path().starts_with(root.as_str()) {
            return Err(
                "gate.login_path must live under gate.admin_root".to_string(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
            },
            auth: AuthConfig {
                jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
                jwt_issuer: default_issuer(),
                token_ttl_hours: 24,
                cookie_name: default_cookie_name(),
                admin_email: None,
                admin_password_hash: None,
            },
            gate: GateConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_missing_secret_refuses_start() {
        let mut config = base_config();
        config.auth.jwt_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_secret_refuses_start() {
        let mut config = base_config();
        config.auth.jwt_secret = "too-short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_login_path_defaults_under_admin_root() {
        let gate = GateConfig {
            admin_root: "/backoffice".to_string(),
            login_path: None,
        };
        assert_eq!(gate.login_path(), "/backoffice/login");
    }

    #[test]
    fn test_login_path_outside_root_rejected() {
        let mut config = base_config();
        config.gate.login_path = Some("/login".to_string());
        assert!(config.validate().is_err());
    }
}
