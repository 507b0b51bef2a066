use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Origin of the note service API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/notes";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A note as the client sees it. The id is opaque here; only the server
/// ever interprets it.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Serialize)]
struct NotePayload<'a> {
    title: &'a str,
    content: &'a str,
}

/// Both error bodies and the delete acknowledgment carry a `message` field.
#[derive(Deserialize)]
struct ServerMessage {
    message: String,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let res = self.http.get(&self.base_url).send().await?;
        if !res.status().is_success() {
            return Err(api_error(res).await);
        }
        Ok(res.json().await?)
    }

    pub async fn create(&self, title: &str, content: &str) -> Result<Note, ClientError> {
        let res = self
            .http
            .post(&self.base_url)
            .json(&NotePayload { title, content })
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(api_error(res).await);
        }
        Ok(res.json().await?)
    }

    pub async fn update(&self, id: &str, title: &str, content: &str) -> Result<Note, ClientError> {
        let res = self
            .http
            .patch(format!("{}/{id}", self.base_url))
            .json(&NotePayload { title, content })
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(api_error(res).await);
        }
        Ok(res.json().await?)
    }

    /// Returns the server's confirmation message.
    pub async fn delete(&self, id: &str) -> Result<String, ClientError> {
        let res = self
            .http
            .delete(format!("{}/{id}", self.base_url))
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(api_error(res).await);
        }
        Ok(res.json::<ServerMessage>().await?.message)
    }
}

async fn api_error(res: reqwest::Response) -> ClientError {
    let status = res.status().as_u16();
    let message = match res.json::<ServerMessage>().await {
        Ok(body) => body.message,
        Err(_) => "unexpected server response".to_string(),
    };
    ClientError::Api { status, message }
}
