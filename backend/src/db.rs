//! SQLite bootstrap shared by the server and the service tests.

use rusqlite::Connection;

use crate::config;

/// Opens the configured database file.
pub fn open() -> Result<Connection, String> {
    Connection::open(config::database_path()).map_err(|e| e.to_string())
}

/// Creates the schema if it does not exist yet. Run once at startup; tests
/// run it against an in-memory connection.
pub fn init_schema(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS students (
            student_id   TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            email        TEXT NOT NULL,
            mobile       TEXT NOT NULL DEFAULT '',
            department   TEXT NOT NULL,
            year         TEXT NOT NULL,
            skills       TEXT NOT NULL DEFAULT '[]',
            interests    TEXT NOT NULL DEFAULT '[]',
            achievements TEXT NOT NULL DEFAULT '[]'
        );
        CREATE TABLE IF NOT EXISTS clubs (
            id           TEXT PRIMARY KEY,
            name         TEXT NOT NULL,
            email        TEXT NOT NULL,
            password     TEXT NOT NULL,
            description  TEXT NOT NULL DEFAULT '',
            purpose      TEXT NOT NULL DEFAULT '',
            category     TEXT,
            leader_id    TEXT NOT NULL,
            subleader_id TEXT NOT NULL,
            logo_base64  TEXT,
            approved     INTEGER NOT NULL DEFAULT 0
        );",
    )
    .map_err(|e| e.to_string())
}
