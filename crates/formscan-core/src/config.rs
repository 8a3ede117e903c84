//! Configuration module
//!
//! Settings are read once at startup from the environment (and an optional
//! `.env` file), validated, and handed to the storage and analysis factories.

use std::env;
use std::fmt;

const SERVER_PORT: u16 = 5000;
const MAX_FILE_SIZE_MB: usize = 10;

/// Server settings that do not depend on the cloud backends
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub max_file_size_bytes: usize,
}

/// Full service configuration: server settings plus AWS access.
#[derive(Clone)]
pub struct ServiceConfig {
    pub base: BaseConfig,
    pub aws_region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub s3_bucket: String,
    // Custom endpoint for S3-compatible providers (MinIO, LocalStack, ...)
    pub s3_endpoint: Option<String>,
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("base", &self.base)
            .field("aws_region", &self.aws_region)
            .field("aws_access_key_id", &self.aws_access_key_id)
            .field("aws_secret_access_key", &"<redacted>")
            .field("s3_bucket", &self.s3_bucket)
            .field("s3_endpoint", &self.s3_endpoint)
            .finish()
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<ServiceConfig>);

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = ServiceConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.0.base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.0.base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.0.base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.0.base.environment
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.0.base.max_file_size_bytes
    }

    pub fn aws_region(&self) -> &str {
        &self.0.aws_region
    }

    pub fn aws_access_key_id(&self) -> &str {
        &self.0.aws_access_key_id
    }

    pub fn aws_secret_access_key(&self) -> &str {
        &self.0.aws_secret_access_key
    }

    pub fn s3_bucket(&self) -> &str {
        &self.0.s3_bucket
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.0.s3_endpoint.as_deref()
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            non_empty(key).ok_or_else(|| anyhow::anyhow!("{} must be set", key))
        };

        let environment = non_empty("ENVIRONMENT")
            .or_else(|| non_empty("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = non_empty("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match non_empty("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let max_file_size_mb = non_empty("MAX_FILE_SIZE_MB")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(MAX_FILE_SIZE_MB);

        let base = BaseConfig {
            server_port,
            cors_origins,
            environment,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
        };

        let config = ServiceConfig {
            base,
            aws_region: required("AWS_REGION")?,
            aws_access_key_id: required("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: required("AWS_SECRET_ACCESS_KEY")?,
            s3_bucket: non_empty("S3_BUCKET_NAME")
                .or_else(|| non_empty("S3_BUCKET"))
                .ok_or_else(|| anyhow::anyhow!("S3_BUCKET_NAME or S3_BUCKET must be set"))?,
            s3_endpoint: non_empty("S3_ENDPOINT"),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than zero"));
        }

        if self.base.cors_origins.is_empty() {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS must list at least one origin (or '*')"
            ));
        }

        if let Some(ref endpoint) = self.s3_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "S3_ENDPOINT must start with http:// or https://"
                ));
            }
        }

        Ok(())
    }
}
