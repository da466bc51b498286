//! # Club Service Module
//!
//! Aggregates the API endpoints for club applications under `/api/clubs`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /apply`**:
//!     - **Handlers**: `apply::process_multipart` / `apply::process_json`
//!     - **Description**: Creates a club application. Accepts either a JSON
//!       `ClubApplication` body, or (when a logo is attached) a
//!       multipart body with an `application` JSON part followed by an
//!       `image` file part. The content-type guard picks the handler. The
//!       new club is stored unapproved; an admin must approve it before it
//!       appears in the public listing.
//!
//! *   **`GET /`**:
//!     - **Handler**: `list::process`
//!     - **Description**: Lists approved clubs.
//!
//! *   **`PUT /{club_id}/approve`**:
//!     - **Handler**: `approve::process`
//!     - **Description**: Marks a pending club as approved.

use actix_web::guard::{self, GuardContext};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

mod approve;
mod apply;
mod list;

const API_PATH: &str = "/api/clubs";

fn is_multipart(ctx: &GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

/// Configures and returns the Actix `Scope` for club-related routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Multipart bodies (logo attached) are routed to the multipart
        // handler; everything else on the same path parses as JSON.
        .route(
            "/apply",
            post()
                .guard(guard::fn_guard(is_multipart))
                .to(apply::process_multipart),
        )
        .route("/apply", post().to(apply::process_json))
        .route("", get().to(list::process))
        .route("/{club_id}/approve", put().to(approve::process))
}
