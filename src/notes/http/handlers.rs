use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    AppState,
};

use super::dto::{DeleteNoteResponse, NoteDto, NotePayload};

/// Both text fields must be non-empty. Whitespace counts as content. One
/// combined error regardless of which field is missing, and no store call
/// is made.
fn validate(payload: &NotePayload) -> Result<(), ApiError> {
    if payload.title.is_empty() || payload.content.is_empty() {
        return Err(ApiError::Validation);
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = NotePayload,
    responses(
        (status = 201, description = "Note created", body = NoteDto),
        (status = 400, description = "Invalid note payload or store failure", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    validate(&payload)?;

    let note = crate::notes::repo::create_note(&state.db, payload.title, payload.content)
        .await
        .map_err(ApiError::Store)?;

    Ok((StatusCode::CREATED, Json(note.into())))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All notes", body = [NoteDto]),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<Vec<NoteDto>>)> {
    let notes = crate::notes::repo::list_notes(&state.db)
        .await
        .map_err(ApiError::Db)?;

    let notes = notes.into_iter().map(NoteDto::from).collect();

    Ok((StatusCode::OK, Json(notes)))
}

#[utoipa::path(
    patch,
    path = "/api/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    request_body = NotePayload,
    responses(
        (status = 200, description = "Note updated", body = NoteDto),
        (status = 400, description = "Invalid note payload or store failure", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<Uuid>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    validate(&payload)?;

    let note = crate::notes::repo::update_note(&state.db, note_id, payload.title, payload.content)
        .await
        .map_err(ApiError::Store)?;
    let note = note.ok_or(ApiError::NotFound)?;

    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note deleted", body = DeleteNoteResponse),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> ApiResult<(StatusCode, Json<DeleteNoteResponse>)> {
    // Unlike the patch route, a malformed id here is a server fault, not a
    // bad request.
    let note_id = Uuid::parse_str(&note_id).map_err(ApiError::BadId)?;

    let deleted = crate::notes::repo::delete_note(&state.db, note_id)
        .await
        .map_err(ApiError::Db)?;

    if !deleted {
        return Err(ApiError::NotFound);
    }

    Ok((
        StatusCode::OK,
        Json(DeleteNoteResponse {
            message: "Note deleted",
        }),
    ))
}
