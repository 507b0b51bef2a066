use sqlx::PgPool;

pub mod app;
pub mod client;
pub mod core;
pub mod error;
pub mod notes;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
