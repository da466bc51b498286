//! # Student Service Module
//!
//! Aggregates the API endpoints for student roster data under
//! `/api/students`.
//!
//! ## Registered Routes:
//!
//! *   **`GET /roster`**:
//!     - **Handler**: `roster::process`
//!     - **Description**: Returns the full student roster as a JSON object
//!       keyed by student identifier. The club-creation workflow fetches
//!       this once on mount and resolves leadership identifiers against it
//!       locally.
//!
//! *   **`POST /profile`**:
//!     - **Handler**: `profile::process`
//!     - **Description**: Creates or replaces a student record. This is the
//!       only way roster entries come into existence; the server ships no
//!       seed data.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod profile;
mod roster;

const API_PATH: &str = "/api/students";

/// Configures and returns the Actix `Scope` for student-related routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/roster", get().to(roster::process))
        .route("/profile", post().to(profile::process))
}
