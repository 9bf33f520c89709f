//! Environment-driven configuration for the task manager server.
//!
//! Only the bind address and the database URL live here. The JWT secret is
//! read directly by the token layer, and the optional `DEMO_USER_*` seeding
//! variables by `main`, so a missing `JWT_SECRET` surfaces as a request-time
//! error rather than preventing startup.

use std::env;

pub struct Config {
    /// Postgres connection string. Required.
    pub database_url: String,
    /// Port the API listens on. Defaults to 8080.
    pub server_port: u16,
    /// Interface the API binds to. Defaults to loopback.
    pub server_host: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
