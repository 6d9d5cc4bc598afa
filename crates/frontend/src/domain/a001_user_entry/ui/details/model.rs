use contracts::domain::a001_user_entry::{users_endpoint, HttpReply, UserEntryDto};
use gloo_net::http::Request;

/// Отправить запись пользователя (POST {api_base}/users)
///
/// Возвращает статус и тело ответа как есть; разбор выполняет редьюсер формы.
/// `Err` означает, что запрос не удалось выполнить.
pub async fn save_user(api_base: &str, dto: &UserEntryDto) -> Result<HttpReply, String> {
    let response = Request::post(&users_endpoint(api_base))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;

    Ok(HttpReply::new(status, body))
}
