use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::auth::AuthService,
};

/// Connects to the database and runs pending migrations.
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

/// Ensures the configured bootstrap administrator exists.
///
/// Does nothing when `ADMIN_EMAIL`/`ADMIN_PASSWORD` are not set. Otherwise creates the
/// account with a hashed password, or promotes an existing account with that email.
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(admin) = &config.admin else {
        tracing::info!("No bootstrap admin configured");
        return Ok(());
    };

    let user = AuthService::new(db).ensure_admin(&admin.email, &admin.password).await?;

    tracing::info!("Bootstrap admin ready: {} (id {})", user.email, user.id);

    Ok(())
}

/// Builds the CORS layer, restricted to `CORS_ORIGIN` when set.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    let layer = match &config.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGIN".to_string(),
                    reason: e.to_string(),
                })?;
            layer.allow_origin(origin)
        }
        None => layer.allow_origin(Any),
    };

    Ok(layer)
}
