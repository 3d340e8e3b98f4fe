// ============================================================================
// Student Handlers
// JSON CRUD endpoints and HTML pages over the shared store
// ============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde_json::{json, Value};

use super::error::ApiError;
use super::pages;
use crate::domain::{NewStudent, Student, StudentId};
use crate::store::StudentStore;

pub(super) type StoreState = State<Arc<StudentStore>>;

// ── JSON API ──────────────────────────────────────────────────────────────────

/// POST /students/
pub(super) async fn create(State(store): StoreState, Json(new): Json<NewStudent>) -> Json<Student> {
    Json(store.create(new))
}

/// GET /students/
pub(super) async fn list(State(store): StoreState) -> Json<Vec<Student>> {
    Json(store.list())
}

/// GET /students/{id}
pub(super) async fn read(
    State(store): StoreState,
    Path(id): Path<u64>,
) -> Result<Json<Student>, ApiError> {
    Ok(Json(store.get(StudentId::new(id))?))
}

/// PUT /students/{id}
pub(super) async fn update(
    State(store): StoreState,
    Path(id): Path<u64>,
    Json(new): Json<NewStudent>,
) -> Result<Json<Student>, ApiError> {
    Ok(Json(store.update(StudentId::new(id), new)?))
}

/// DELETE /students/{id}
pub(super) async fn delete(
    State(store): StoreState,
    Path(id): Path<u64>,
) -> Result<Json<Value>, ApiError> {
    store.delete(StudentId::new(id))?;
    Ok(Json(json!({ "message": "Student deleted successfully" })))
}

// ── HTML pages ────────────────────────────────────────────────────────────────

/// GET /
pub(super) async fn home() -> Html<&'static str> {
    Html(pages::STUDENT_HOME_HTML)
}

/// GET /students/html
pub(super) async fn list_page(State(store): StoreState) -> Html<String> {
    Html(pages::student_list(&store.list()))
}

/// GET /students/html/{id}
pub(super) async fn detail_page(
    State(store): StoreState,
    Path(id): Path<u64>,
) -> Result<Html<String>, ApiError> {
    let student = store.get(StudentId::new(id))?;
    Ok(Html(pages::student_detail(&student)))
}
