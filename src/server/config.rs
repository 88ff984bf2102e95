use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRY_HOURS: i64 = 168;
const DEFAULT_CLOUDINARY_API_URL: &str = "https://api.cloudinary.com";
const DEFAULT_CLOUDINARY_FOLDER: &str = "kosera";
const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const DEFAULT_GEOCODE_USER_AGENT: &str = "Kosera/0.1";
const DEFAULT_GEOCODE_RATE_LIMIT: u32 = 30;
const DEFAULT_GEOCODE_RATE_WINDOW_SECS: u64 = 60;

/// Credentials for the Cloudinary-compatible image CDN.
#[derive(Clone, Debug)]
pub struct CdnConfig {
    pub api_url: String,
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

#[derive(Clone, Debug)]
pub struct GeocodeConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Requests allowed per client within one window.
    pub rate_limit: u32,
    pub rate_window_secs: u64,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    /// Origins allowed by CORS. Empty means same-origin only.
    pub cors_allowed_origins: Vec<String>,

    /// `None` when any of the Cloudinary credentials is unset; uploads then fail
    /// with 503.
    pub cdn: Option<CdnConfig>,
    pub geocode: GeocodeConfig,

    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let cdn = match (
            optional("CLOUDINARY_CLOUD_NAME"),
            optional("CLOUDINARY_API_KEY"),
            optional("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CdnConfig {
                api_url: optional("CLOUDINARY_API_URL")
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_API_URL.to_string()),
                cloud_name,
                api_key,
                api_secret,
                folder: optional("CLOUDINARY_FOLDER")
                    .unwrap_or_else(|| DEFAULT_CLOUDINARY_FOLDER.to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_hours: parsed("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
            cors_allowed_origins: optional("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            cdn,
            geocode: GeocodeConfig {
                base_url: optional("NOMINATIM_URL")
                    .unwrap_or_else(|| DEFAULT_NOMINATIM_URL.to_string()),
                user_agent: optional("GEOCODE_USER_AGENT")
                    .unwrap_or_else(|| DEFAULT_GEOCODE_USER_AGENT.to_string()),
                rate_limit: parsed("GEOCODE_RATE_LIMIT", DEFAULT_GEOCODE_RATE_LIMIT)?,
                rate_window_secs: parsed(
                    "GEOCODE_RATE_WINDOW_SECS",
                    DEFAULT_GEOCODE_RATE_WINDOW_SECS,
                )?,
            },
            admin_username: optional("ADMIN_USERNAME"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: DEFAULT_GEOCODE_USER_AGENT.to_string(),
            rate_limit: DEFAULT_GEOCODE_RATE_LIMIT,
            rate_window_secs: DEFAULT_GEOCODE_RATE_WINDOW_SECS,
        }
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
