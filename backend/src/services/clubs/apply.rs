//! Club application intake.
//!
//! Two wire shapes land here: a plain JSON `ClubApplication`, or a
//! multipart body carrying the same JSON in an `application` part plus the
//! club logo in an `image` part. Both run the same checks the frontend
//! enforces before enabling its submit button (required scalars present,
//! leader and sub-leader distinct and known to the roster), so a request
//! that bypasses the form is refused with the same wording the form would
//! have shown.

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use base64::{engine::general_purpose, Engine as _};
use common::model::club::ClubApplication;
use common::requests::CreateClubResponse;
use futures_util::StreamExt;
use rusqlite::{params, Connection};
use serde_json::from_slice;

use crate::db;
use crate::services::util::{looks_like_email, normalize_identifier};

/// Actix handler for JSON submissions on `POST /api/clubs/apply`.
pub async fn process_json(payload: web::Json<ClubApplication>) -> impl Responder {
    match create_club(&payload, None).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

/// Actix handler for multipart submissions on `POST /api/clubs/apply`.
pub async fn process_multipart(payload: Multipart) -> impl Responder {
    match read_multipart_application(payload).await {
        Ok((application, logo)) => match create_club(&application, logo).await {
            Ok(response) => HttpResponse::Ok().json(response),
            Err(e) => HttpResponse::BadRequest().body(e),
        },
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Collects the `application` JSON part and the optional `image` part.
async fn read_multipart_application(
    mut payload: Multipart,
) -> Result<(ClubApplication, Option<String>), Box<dyn std::error::Error>> {
    let mut application: Option<ClubApplication> = None;
    let mut logo: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match name.as_deref() {
            Some("application") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                application = Some(from_slice(&bytes)?);
            }
            Some("image") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                if !bytes.is_empty() {
                    logo = Some(general_purpose::STANDARD.encode(&bytes));
                }
            }
            _ => {}
        }
    }

    let application = application.ok_or("Missing application part")?;
    Ok((application, logo))
}

async fn create_club(
    application: &ClubApplication,
    logo_base64: Option<String>,
) -> Result<CreateClubResponse, String> {
    validate_application(application)?;
    let conn = db::open()?;
    create_club_in(&conn, application, logo_base64)
}

/// Field-level checks that need no database access.
pub fn validate_application(application: &ClubApplication) -> Result<(), String> {
    if application.club_name.trim().is_empty() {
        return Err("Club name must not be empty".to_string());
    }
    if !looks_like_email(&application.club_email) {
        return Err("Club email address is not valid".to_string());
    }
    if application.club_password.trim().is_empty() {
        return Err("Club password must not be empty".to_string());
    }

    let leader = normalize_identifier(&application.leader_id);
    let subleader = normalize_identifier(&application.subleader_id);
    if leader.is_empty() || subleader.is_empty() {
        return Err("Leader and sub-leader student ids are required".to_string());
    }
    if leader == subleader {
        return Err("Leader and sub-leader must be different students".to_string());
    }
    Ok(())
}

/// Inserts the (unapproved) club after confirming both leadership ids are
/// in the roster.
pub fn create_club_in(
    conn: &Connection,
    application: &ClubApplication,
    logo_base64: Option<String>,
) -> Result<CreateClubResponse, String> {
    ensure_student_exists(conn, &application.leader_id, "Leader")?;
    ensure_student_exists(conn, &application.subleader_id, "Sub-leader")?;

    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO clubs
         (id, name, email, password, description, purpose, category, leader_id, subleader_id, logo_base64, approved)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 0)",
        params![
            id,
            application.club_name,
            application.club_email,
            application.club_password,
            application.description,
            application.purpose,
            application.category.map(|c| c.as_str()),
            normalize_identifier(&application.leader_id),
            normalize_identifier(&application.subleader_id),
            logo_base64,
        ],
    )
    .map_err(|e| e.to_string())?;

    Ok(CreateClubResponse {
        id,
        message: "Club application submitted. Waiting for admin approval.".to_string(),
    })
}

fn ensure_student_exists(conn: &Connection, raw_id: &str, label: &str) -> Result<(), String> {
    let normalized = normalize_identifier(raw_id);
    let exists = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM students WHERE UPPER(TRIM(student_id)) = ?1)",
            params![normalized],
            |row| row.get::<_, i64>(0),
        )
        .map(|v| v != 0)
        .map_err(|e| e.to_string())?;

    if exists {
        Ok(())
    } else {
        Err(format!(
            "{} student id '{}' is not in the roster",
            label, normalized
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::club::ClubCategory;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().expect("in-memory db");
        db::init_schema(&conn).expect("schema");
        conn
    }

    fn seed_student(conn: &Connection, id: &str) {
        conn.execute(
            "INSERT INTO students (student_id, name, email, mobile, department, year)
             VALUES (?1, 'Test Student', 'student@example.edu', '', 'CSE', '2')",
            params![id],
        )
        .expect("seed student");
    }

    fn application() -> ClubApplication {
        ClubApplication {
            club_name: "Coding Circle".to_string(),
            club_email: "coding@example.edu".to_string(),
            club_password: "hunter2".to_string(),
            description: "We write code.".to_string(),
            purpose: "Teach programming.".to_string(),
            category: Some(ClubCategory::Technical),
            leader_id: "21CS044".to_string(),
            subleader_id: "21CS045".to_string(),
        }
    }

    #[test]
    fn valid_application_passes_field_checks() {
        assert!(validate_application(&application()).is_ok());
    }

    #[test]
    fn same_leadership_pair_is_rejected() {
        let mut app = application();
        // Case differences do not make two ids distinct.
        app.subleader_id = " 21cs044 ".to_string();
        assert!(validate_application(&app).is_err());
    }

    #[test]
    fn missing_required_scalars_are_rejected() {
        let mut app = application();
        app.club_password = String::new();
        assert!(validate_application(&app).is_err());

        let mut app = application();
        app.club_email = "nonsense".to_string();
        assert!(validate_application(&app).is_err());
    }

    #[test]
    fn create_inserts_an_unapproved_club() {
        let conn = test_conn();
        seed_student(&conn, "21CS044");
        seed_student(&conn, "21CS045");

        let response = create_club_in(&conn, &application(), None).unwrap();
        assert!(!response.id.is_empty());

        let (approved, category): (i64, Option<String>) = conn
            .query_row(
                "SELECT approved, category FROM clubs WHERE id = ?1",
                params![response.id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(approved, 0);
        assert_eq!(category.as_deref(), Some("technical"));
    }

    #[test]
    fn unknown_leadership_id_is_refused() {
        let conn = test_conn();
        seed_student(&conn, "21CS044");

        let err = create_club_in(&conn, &application(), None).unwrap_err();
        assert!(err.contains("21CS045"), "unexpected error: {err}");
    }

    #[test]
    fn leadership_ids_match_case_insensitively() {
        let conn = test_conn();
        seed_student(&conn, "21cs044");
        seed_student(&conn, "21cs045");

        assert!(create_club_in(&conn, &application(), None).is_ok());
    }

    #[test]
    fn logo_is_stored_when_present() {
        let conn = test_conn();
        seed_student(&conn, "21CS044");
        seed_student(&conn, "21CS045");

        let logo = general_purpose::STANDARD.encode(b"fake image bytes");
        let response = create_club_in(&conn, &application(), Some(logo.clone())).unwrap();

        let stored: Option<String> = conn
            .query_row(
                "SELECT logo_base64 FROM clubs WHERE id = ?1",
                params![response.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stored, Some(logo));
    }
}
