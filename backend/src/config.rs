//! Runtime configuration, overridable through the environment.

use std::env;

const DEFAULT_DB_PATH: &str = "campus.sqlite";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Path of the SQLite database file. `CAMPUS_DB` overrides the default.
pub fn database_path() -> String {
    env::var("CAMPUS_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string())
}

/// Address the HTTP server binds to. `CAMPUS_HOST` / `CAMPUS_PORT` override
/// the defaults; an unparsable port falls back to the default.
pub fn bind_address() -> (String, u16) {
    let host = env::var("CAMPUS_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("CAMPUS_PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    (host, port)
}
