use std::time::Duration;

use rocket::{
    fairing::{self, Fairing, Info, Kind},
    Build, Rocket,
};
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

pub struct DatabaseFairing {
    connection_string: String,
    max_connections: u32,
    acquire_timeout: Duration,
}

impl DatabaseFairing {
    pub fn fairing(config: &Config) -> Self {
        Self {
            connection_string: config.database_url.clone(),
            max_connections: config.max_connections,
            acquire_timeout: config.acquire_timeout,
        }
    }
}

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "Database",
            kind: Kind::Ignite | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        // Connections are opened on first use so the service comes up even
        // while the database is unreachable; /readyz reports on it.
        let db = match PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_lazy(&self.connection_string)
        {
            Ok(db) => db,
            Err(e) => {
                error!("Invalid database connection string: {e}");
                return Err(rocket);
            }
        };

        info!(
            "Database pool ready (max {} connections).",
            self.max_connections
        );
        Ok(rocket.manage(db))
    }
}
