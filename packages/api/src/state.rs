use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::{sync::Arc, time::Duration};

pub type AppState = Arc<State>;

pub struct State {
    pub db: DatabaseConnection,
}

impl State {
    pub async fn new() -> Self {
        let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let sql_logging = std::env::var("SQL_LOGGING")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let mut opt = ConnectOptions::new(db_url);
        opt.max_connections(10)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(sql_logging);

        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to database");

        Self { db }
    }
}
