use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use crate::access::session::ROLE_HEADER;
use crate::api::{regime_router, ApiState};
use crate::clock::FixedClock;
use crate::roster::RosterOrdering;

pub(super) fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 10)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid instant")
}

pub(super) fn router() -> axum::Router {
    regime_router(ApiState::new(
        Arc::new(FixedClock(fixed_now())),
        RosterOrdering::StatusFirst,
    ))
}

pub(super) fn post_json(uri: &str, role: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(role) = role {
        builder = builder.header(ROLE_HEADER, role);
    }
    builder
        .body(Body::from(serde_json::to_vec(payload).expect("payload serializes")))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn students() -> Value {
    json!([
        {
            "id": 1,
            "name": "Carla Mendes",
            "course": "Enfermagem",
            "class": "ENF-2A",
            "startDate": "2025-02-01",
            "endDate": "2025-03-01",
            "registeredAt": "2025-02-01T10:00:00"
        },
        {
            "id": 2,
            "name": "Bruno Alves",
            "course": "Administração",
            "class": "ADM-1B",
            "startDate": "2025-03-01",
            "endDate": "2025-03-14",
            "registeredAt": "2025-03-01T08:00:00"
        },
        {
            "id": "3",
            "name": "Ana Souza",
            "course": "Administração",
            "class": "ADM-1A",
            "startDate": "2025-03-01",
            "endDate": "2025-05-30",
            "registeredAt": "2025-03-05T12:00:00"
        }
    ])
}

pub(super) fn materials() -> Value {
    json!([
        {
            "id": 10,
            "studentId": 3,
            "teacherName": "Prof. Carlos",
            "subject": "Matemática",
            "date": "2025-03-06",
            "type": "activity",
            "description": "Lista 1",
            "links": ["https://nead.example.edu/lista-1"]
        },
        {
            "id": 11,
            "studentId": 3,
            "teacherName": "Prof. Carlos",
            "subject": "Matemática",
            "date": "2025-03-08",
            "type": "material",
            "description": "Apostila",
            "files": [{ "name": "apostila.pdf" }]
        },
        {
            "id": 12,
            "studentId": 2,
            "teacherName": "Prof. Denise",
            "subject": "Química",
            "date": "2025-03-07",
            "type": "material",
            "description": "Tabela periódica"
        }
    ])
}
