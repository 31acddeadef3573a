use serde::{Deserialize, Serialize};

/// Категория ошибки, которую backend отдаёт клиенту.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    Validation,
    BadRequest,
    NotFound,
    Unauthorized,
    Constraint,
    Network,
    Internal,
}

/// Тело ответа с ошибкой: `{"kind": "...", "message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
