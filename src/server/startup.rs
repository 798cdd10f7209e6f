use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured log level is used.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the PostgreSQL database and runs pending migrations.
///
/// Establishes a connection pool using the URL built from configuration, then runs all
/// pending SeaORM migrations so the `cars` and `orders` tables are up to date before the
/// server accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(config.database_url());
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!(
        "Connected to database {} at {}:{}",
        config.db_database,
        config.db_host,
        config.db_port
    );

    Ok(db)
}

/// Checks that the database is reachable.
///
/// # Returns
/// - `Ok(())` - Database answered the ping
/// - `Err(AppError::DbErr)` - Connection is unavailable
pub async fn check_database(db: &DatabaseConnection) -> Result<(), AppError> {
    db.ping().await?;

    Ok(())
}
