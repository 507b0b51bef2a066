use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub async fn create_note(db: &PgPool, title: String, content: String) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (title, content)
        VALUES ($1, $2)
        RETURNING id, title, content, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .fetch_one(db)
    .await
}

pub async fn list_notes(db: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, title, content, created_at, updated_at
        FROM notes
        ORDER BY created_at
        "#,
    )
    .fetch_all(db)
    .await
}

/// Full replacement of both text fields. Returns `None` when no row matches.
pub async fn update_note(
    db: &PgPool,
    note_id: Uuid,
    title: String,
    content: String,
) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        UPDATE notes
        SET title = $2, content = $3, updated_at = now()
        WHERE id = $1
        RETURNING id, title, content, created_at, updated_at
        "#,
    )
    .bind(note_id)
    .bind(title)
    .bind(content)
    .fetch_optional(db)
    .await
}

pub async fn delete_note(db: &PgPool, note_id: Uuid) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(note_id)
        .execute(db)
        .await?;

    Ok(res.rows_affected() == 1)
}
