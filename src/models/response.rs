use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Created,
    Accepted,
    NotFound,
    BadRequest,
}

/// Uniform envelope around every handler response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::with_data(ResponseStatus::Success, data)
    }

    pub fn created(data: T) -> Self {
        Self::with_data(ResponseStatus::Created, data)
    }

    fn with_data(status: ResponseStatus, data: T) -> Self {
        Self {
            status,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn accepted() -> Self {
        Self {
            status: ResponseStatus::Accepted,
            data: None,
            message: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ResponseStatus::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_message(ResponseStatus::BadRequest, message)
    }

    fn with_message(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            message: Some(message.into()),
        }
    }
}
