use actix_web::{web, Responder};
use common::model::student::StudentRecord;
use rusqlite::{params, Connection};

use crate::db;
use crate::services::util::{encode_list, looks_like_email};

/// Actix handler for `POST /api/students/profile`.
pub async fn process(payload: web::Json<StudentRecord>) -> impl Responder {
    match upsert_student(&payload).await {
        Ok(_) => actix_web::HttpResponse::Ok().json(&*payload),
        Err(e) => {
            actix_web::HttpResponse::BadRequest().body(format!("Error saving profile: {}", e))
        }
    }
}

async fn upsert_student(record: &StudentRecord) -> Result<(), String> {
    let conn = db::open()?;
    upsert_student_in(&conn, record)
}

/// Creates or replaces the roster entry for `record.student_id`.
pub fn upsert_student_in(conn: &Connection, record: &StudentRecord) -> Result<(), String> {
    if record.student_id.trim().is_empty() {
        return Err("Student id must not be empty".to_string());
    }
    if record.name.trim().is_empty() {
        return Err("Name must not be empty".to_string());
    }
    if !looks_like_email(&record.email) {
        return Err("Email address is not valid".to_string());
    }

    conn.execute(
        "INSERT OR REPLACE INTO students
         (student_id, name, email, mobile, department, year, skills, interests, achievements)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            record.student_id,
            record.name,
            record.email,
            record.mobile,
            record.department,
            record.year,
            encode_list(&record.skills),
            encode_list(&record.interests),
            encode_list(&record.achievements),
        ],
    )
    .map_err(|e| e.to_string())?;
    Ok(())
}
