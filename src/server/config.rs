/**
 * Server Configuration
 *
 * Configuration comes from environment variables, with defaults suitable
 * for local development. The optional Postgres connection is resilient:
 * a missing or unreachable database logs a warning and the server runs on
 * the in-memory store instead.
 */

use sqlx::PgPool;

/// Behavior flags and bind configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// TCP port to bind (`SERVER_PORT`, default 8080)
    pub port: u16,

    /// Whether `/sse` accepts anonymous subscribers
    /// (`OPEN_PUSH_CHANNEL`, default true)
    pub open_push_channel: bool,

    /// Whether child-resource writes verify the parent board exists
    /// (`VALIDATE_PARENT_BOARD`, default false: writes trust the board id
    /// embedded in the URL)
    pub validate_parent_board: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            open_push_channel: true,
            validate_parent_board: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            open_push_channel: env_flag("OPEN_PUSH_CHANNEL", defaults.open_push_channel),
            validate_parent_board: env_flag(
                "VALIDATE_PARENT_BOARD",
                defaults.validate_parent_board,
            ),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Load and initialize the database connection pool
///
/// Returns `None` if `DATABASE_URL` is not set or the connection fails;
/// errors are logged but do not prevent startup.
pub async fn load_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to the in-memory store");
            return None;
        }
    };

    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may already be applied; keep going.
            tracing::error!("Failed to run database migrations: {:?}", e);
        }
    }

    Some(pool)
}
