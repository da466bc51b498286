use actix_web::Responder;
use common::model::club::{ClubCategory, ClubSummary};
use rusqlite::Connection;

use crate::db;

/// Actix handler for `GET /api/clubs`. Approved clubs only.
pub async fn process() -> impl Responder {
    match list_approved().await {
        Ok(clubs) => actix_web::HttpResponse::Ok().json(clubs),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error listing clubs: {}", e)),
    }
}

async fn list_approved() -> Result<Vec<ClubSummary>, String> {
    let conn = db::open()?;
    list_approved_in(&conn)
}

pub fn list_approved_in(conn: &Connection) -> Result<Vec<ClubSummary>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, description, category, leader_id, subleader_id, approved
             FROM clubs WHERE approved = 1",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, i64>(6)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut clubs = Vec::new();
    for row in rows {
        let (id, name, description, category, leader_id, subleader_id, approved) =
            row.map_err(|e| e.to_string())?;
        clubs.push(ClubSummary {
            id,
            name,
            description,
            category: category.as_deref().and_then(ClubCategory::from_str),
            leader_id,
            subleader_id,
            approved: approved != 0,
        });
    }
    Ok(clubs)
}
