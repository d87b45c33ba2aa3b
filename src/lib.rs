pub mod api;
pub mod config;
pub mod db;
pub mod link;
pub mod messages;
pub mod notifications;
pub mod rooms;

use serde_json::Value;
use uuid::Uuid;

pub use api::ApiClient;
pub use config::{Config, ConfigError};
pub use db::{ListOptions, PocketBase, Record, RecordStore};
pub use link::check_link;
pub use messages::RoomMessage;
pub use rooms::{RoomType, UnknownRoomType};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed: {status} {status_text}")]
    Request {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    /// No response was obtained (DNS, connect, timeout, broken body stream).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("expected {0} in response")]
    MissingField(String),

    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Status code of a `Request` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub trait GetField {
    fn get_str_field(&self, field: &str) -> ApiResult<String>;

    /// Like `get_str_field`, but an empty string counts as absent.
    fn get_nonempty_str_field(&self, field: &str) -> ApiResult<String> {
        let value = self.get_str_field(field)?;
        if value.is_empty() {
            return Err(ApiError::MissingField(field.to_owned()));
        }
        Ok(value)
    }
}

impl GetField for Value {
    fn get_str_field(&self, field: &str) -> ApiResult<String> {
        self.get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| ApiError::MissingField(field.to_owned()))
    }
}

/// Fresh id for a caller that has no account, e.g. `user0192f0c4...`.
pub fn anonymous_user_id() -> String {
    "user".to_owned() + &Uuid::now_v7().simple().to_string()
}
