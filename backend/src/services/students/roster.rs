use std::collections::HashMap;

use actix_web::Responder;
use common::model::student::StudentRecord;
use rusqlite::Connection;

use crate::db;
use crate::services::util::decode_list;

/// Actix handler for `GET /api/students/roster`.
///
/// Returns the whole roster in one response; the frontend caches it for the
/// lifetime of the club-creation form.
pub async fn process() -> impl Responder {
    match load_roster().await {
        Ok(roster) => actix_web::HttpResponse::Ok().json(roster),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error loading roster: {}", e)),
    }
}

async fn load_roster() -> Result<HashMap<String, StudentRecord>, String> {
    let conn = db::open()?;
    load_roster_from(&conn)
}

/// Reads every student row into a map keyed by identifier.
pub fn load_roster_from(conn: &Connection) -> Result<HashMap<String, StudentRecord>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT student_id, name, email, mobile, department, year, skills, interests, achievements
             FROM students",
        )
        .map_err(|e| e.to_string())?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
                row.get::<_, String>(7)?,
                row.get::<_, String>(8)?,
            ))
        })
        .map_err(|e| e.to_string())?;

    let mut roster = HashMap::new();
    for row in rows {
        let (student_id, name, email, mobile, department, year, skills, interests, achievements) =
            row.map_err(|e| e.to_string())?;
        let record = StudentRecord {
            student_id: student_id.clone(),
            name,
            email,
            mobile,
            department,
            year,
            skills: decode_list(&skills),
            interests: decode_list(&interests),
            achievements: decode_list(&achievements),
        };
        roster.insert(student_id, record);
    }
    Ok(roster)
}
