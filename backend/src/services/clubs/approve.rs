use actix_web::{web, Responder};
use rusqlite::{params, Connection};

use crate::db;

/// Actix handler for `PUT /api/clubs/{club_id}/approve`.
pub async fn process(club_id: web::Path<String>) -> impl Responder {
    match approve(&club_id).await {
        Ok(true) => actix_web::HttpResponse::Ok().body("Club approved"),
        Ok(false) => actix_web::HttpResponse::NotFound().body("Club not found"),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error approving club: {}", e)),
    }
}

async fn approve(club_id: &str) -> Result<bool, String> {
    let conn = db::open()?;
    approve_in(&conn, club_id)
}

/// Marks the club approved. Returns `false` when no such club exists.
pub fn approve_in(conn: &Connection, club_id: &str) -> Result<bool, String> {
    let updated = conn
        .execute(
            "UPDATE clubs SET approved = 1 WHERE id = ?1",
            params![club_id],
        )
        .map_err(|e| e.to_string())?;
    Ok(updated > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approving_a_missing_club_reports_not_found() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        db::init_schema(&conn).expect("schema");
        assert!(!approve_in(&conn, "no-such-id").unwrap());
    }
}
