use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::seed_admin,
};

/// Upper bound for any call to the CDN or the geocoding service.
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the outbound HTTP client.
///
/// Redirects are disabled so a compromised upstream cannot bounce requests to
/// internal addresses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Seeds the initial admin from `ADMIN_USERNAME` / `ADMIN_PASSWORD`.
///
/// Does nothing when either variable is unset or an active admin already exists.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) else {
        return Ok(());
    };

    match seed_admin(db, username, password).await? {
        Some(admin) => tracing::info!("Seeded admin account '{}'", admin.username),
        None => tracing::info!("Admin account present, skipping seed"),
    }

    Ok(())
}

/// Builds the CORS layer from `CORS_ALLOWED_ORIGINS`.
///
/// With no configured origins only same-origin requests are allowed.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
