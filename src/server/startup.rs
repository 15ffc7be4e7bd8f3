//! Process startup: logging, database, cache and the initial admin user.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    cache::{redis::RedisCache, ResponseCache},
    config::Config,
    data::user::UserRepository,
    error::Error,
    util::password::hash_password,
};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence, otherwise the level is `debug` when `IS_DEBUG` is set and
/// `info` when it is not.
pub fn init_tracing(config: &Config) {
    let default_filter = if config.is_debug {
        "upravdom=debug,sea_orm=debug,tower_http=debug,info"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to the database, create the configured schema and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(config.is_debug)
        .set_schema_search_path(config.sql_schema.clone());

    let db = Database::connect(opt).await?;

    if db.get_database_backend() == DbBackend::Postgres {
        // Schema names are restricted to identifier characters by the config loader
        db.execute_unprepared(&format!(
            "CREATE SCHEMA IF NOT EXISTS \"{}\"",
            config.sql_schema
        ))
        .await?;
    }

    Migrator::up(&db, None).await?;

    tracing::info!(schema = %config.sql_schema, "Connected to database and applied migrations");

    Ok(db)
}

/// Connect to Valkey/Redis when a URL is configured, otherwise use the in-process cache
pub async fn connect_to_cache(config: &Config) -> Result<ResponseCache, Error> {
    use fred::prelude::*;

    let Some(valkey_url) = &config.valkey_url else {
        tracing::info!("No VALKEY_URL configured, caching responses in memory");
        return Ok(ResponseCache::memory());
    };

    let redis_config = fred::prelude::Config::from_url(valkey_url)?;
    let pool = Pool::new(redis_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    tracing::info!("Connected to Valkey response cache");

    Ok(ResponseCache::Redis(RedisCache::new(pool)))
}

/// Create the configured admin user unless a user with that login already exists
pub async fn ensure_admin_user(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let (Some(login), Some(password)) = (&config.admin_login, &config.admin_password) else {
        return Ok(());
    };

    let user_repository = UserRepository::new(db);
    if user_repository.get_by_login(login).await?.is_some() {
        return Ok(());
    }

    let hashed_password = hash_password(password)?;
    user_repository.create(login, &hashed_password).await?;

    tracing::info!(login = %login, "Created admin user");

    Ok(())
}
