use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Hides the credentials part of a connection URL for logging.
pub fn redact_database_url(database_url: &str) -> String {
    database_url
        .rsplit_once('@')
        .map(|(_, host)| format!("<hidden>@{}", host))
        .unwrap_or_else(|| "<invalid format>".to_string())
}
