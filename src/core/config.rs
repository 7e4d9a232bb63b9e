use dotenv::dotenv;
use sqlx::mysql::MySqlConnectOptions;
use std::env;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub redis_addr: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub bcrypt_cost: u32,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));
        let optional =
            |var: &'static str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let db_host = required("DB_HOST")?;
        let db_port = parse_number("DB_PORT", &required("DB_PORT")?)?;
        let db_user = required("DB_USER")?;
        // may legitimately be empty, but must be present
        let db_password = required("DB_PASSWORD")?;
        let db_name = required("DB_NAME")?;
        let redis_addr = required("REDIS_ADDR")?;

        let jwt_secret = required("JWT_SECRET")?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid {
                var: "JWT_SECRET",
                reason: "must not be empty".to_string(),
            });
        }

        let server_host = optional("SERVER_HOST", "0.0.0.0");
        let server_port = parse_number("SERVER_PORT", &optional("SERVER_PORT", "8000"))?;
        let max_connections =
            parse_number("MAX_DB_CONNECTIONS", &optional("MAX_DB_CONNECTIONS", "10"))?;

        let bcrypt_cost: u32 = parse_number(
            "BCRYPT_COST",
            &optional("BCRYPT_COST", &bcrypt::DEFAULT_COST.to_string()),
        )?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                var: "BCRYPT_COST",
                reason: "must be between 4 and 31".to_string(),
            });
        }

        let app_env = optional("APP_ENV", "development");

        Ok(Config {
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            redis_addr,
            jwt_secret,
            server_host,
            server_port,
            max_connections,
            bcrypt_cost,
            app_env,
        })
    }

    /// MySQL connection options; the password is never formatted into a URL.
    pub fn mysql_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .charset("utf8mb4")
    }

    /// `REDIS_ADDR` accepts a bare `host:port` or a full `redis://` URL.
    pub fn redis_url(&self) -> String {
        if self.redis_addr.contains("://") {
            self.redis_addr.clone()
        } else {
            format!("redis://{}", self.redis_addr)
        }
    }

    /// Logga la configurazione (nascondendo i segreti)
    pub fn log_summary(&self) {
        info!("Environment: {}", self.app_env);
        info!("Server Address: {}:{}", self.server_host, self.server_port);
        info!(
            "Database: {}@{}:{}/{} (password ***)",
            self.db_user, self.db_host, self.db_port, self.db_name
        );
        info!("Max DB Connections: {}", self.max_connections);
        info!("Redis: {}", Self::mask_url(&self.redis_url()));
        info!("bcrypt cost: {}", self.bcrypt_cost);
        info!("JWT Secret: configured ({} bytes)", self.jwt_secret.len());
    }

    /// Maschera le credenziali di un URL per il logging
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}
