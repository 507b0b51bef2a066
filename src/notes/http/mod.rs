use axum::{
    routing::{delete, post},
    Router,
};

use crate::AppState;
mod dto;
pub(crate) mod handlers;

pub use dto::{DeleteNoteResponse, NoteDto, NotePayload};
pub use handlers::{create_note, delete_note, list_notes, update_note};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note).get(list_notes))
        .route("/{id}", delete(delete_note).patch(update_note))
}
