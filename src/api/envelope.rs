use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Standard backend response: `{ "status": bool, "data": T, "message": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> AppResult<T> {
        if !self.status {
            return Err(AppError::Api(
                self.message
                    .unwrap_or_else(|| "request failed".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| AppError::Api("response carried no data".to_string()))
    }
}

/// A saved response: either the full envelope or just its `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Envelope(ApiResponse<T>),
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_result(self) -> AppResult<T> {
        match self {
            Payload::Envelope(env) => env.into_result(),
            Payload::Bare(data) => Ok(data),
        }
    }
}

pub fn parse_payload<T: DeserializeOwned>(json: &str) -> AppResult<T> {
    let payload: Payload<T> = serde_json::from_str(json)?;
    payload.into_result()
}

pub fn read_payload<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "reading json payload");
    parse_payload(&content)
}
