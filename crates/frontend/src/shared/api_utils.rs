//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET и разбор JSON. Ошибка сервера возвращается текстом из `ApiErrorBody`.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;
    read_json(response).await
}

/// POST без тела и разбор JSON-ответа.
pub async fn post_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::post(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Ошибка сети: {}", e))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(error_message(status, &text));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Ошибка парсинга: {}", e))
}

/// Текст ошибки для пользователя.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) => format!("{} (HTTP {})", err.message, status),
        Err(_) if body.trim().is_empty() => format!("Ошибка сервера: HTTP {}", status),
        Err(_) => format!("Ошибка сервера: HTTP {}: {}", status, body.trim()),
    }
}
