use thiserror::Error;

/// Ошибка проверки полей формы. Текст ошибки показывается пользователю как есть.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name, Roll Number, and Gender are required.")]
    MissingRequired,

    #[error("Gender must be one of Male, Female, or Other.")]
    UnknownGender(String),
}

/// Ошибка отправки формы на сервер
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Запрос не был выполнен (сеть, CORS и т.п.)
    #[error("{0}")]
    Transport(String),

    /// Тело ответа не является JSON
    #[error("{0}")]
    MalformedResponse(String),

    /// Сервер вернул статус вне 2xx
    #[error("{0}")]
    Rejected(String),
}

/// Ответ сервера: статус и сырое тело
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub const SAVE_FAILED: &str = "Save failed";

/// Разбирает ответ сервера.
///
/// Тело разбирается как JSON до проверки статуса, поэтому некорректный JSON
/// является ошибкой даже при статусе 2xx.
pub fn interpret_reply(reply: &HttpReply) -> Result<(), SubmissionError> {
    let body: serde_json::Value = serde_json::from_str(&reply.body)
        .map_err(|e| SubmissionError::MalformedResponse(e.to_string()))?;

    if reply.is_success() {
        return Ok(());
    }

    // Сообщение берётся только из поля `error` JSON-объекта
    let message = body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(SAVE_FAILED)
        .to_string();

    Err(SubmissionError::Rejected(message))
}

/// URL эндпоинта сохранения пользователя
pub fn users_endpoint(api_base: &str) -> String {
    format!("{}/users", api_base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert_eq!(interpret_reply(&HttpReply::new(200, "{}")), Ok(()));
        assert_eq!(interpret_reply(&HttpReply::new(201, r#"{"id":"1"}"#)), Ok(()));
        assert_eq!(interpret_reply(&HttpReply::new(299, "[]")), Ok(()));
    }

    #[test]
    fn test_rejected_uses_server_error() {
        let reply = HttpReply::new(400, r#"{"error":"Roll number exists"}"#);
        assert_eq!(
            interpret_reply(&reply),
            Err(SubmissionError::Rejected("Roll number exists".to_string()))
        );
    }

    #[test]
    fn test_rejected_falls_back_to_generic_message() {
        for body in [
            "{}",
            r#"{"error":""}"#,
            r#"{"error":42}"#,
            r#"{"error":null}"#,
            "[1,2]",
            r#"["Internal detail"]"#,
            r#"["Roll number exists", 1]"#,
            r#""Roll number exists""#,
            "null",
        ] {
            let reply = HttpReply::new(500, body);
            assert_eq!(
                interpret_reply(&reply),
                Err(SubmissionError::Rejected(SAVE_FAILED.to_string())),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_array_body_is_not_an_error_object() {
        let reply = HttpReply::new(400, r#"["Internal detail"]"#);
        assert_eq!(
            interpret_reply(&reply),
            Err(SubmissionError::Rejected("Save failed".to_string()))
        );
    }

    #[test]
    fn test_malformed_body() {
        let err = interpret_reply(&HttpReply::new(200, "<html>")).unwrap_err();
        assert!(matches!(err, SubmissionError::MalformedResponse(_)));
        assert!(!err.to_string().is_empty());

        let err = interpret_reply(&HttpReply::new(502, "")).unwrap_err();
        assert!(matches!(err, SubmissionError::MalformedResponse(_)));
    }

    #[test]
    fn test_users_endpoint() {
        assert_eq!(users_endpoint("http://localhost:3000"), "http://localhost:3000/users");
        assert_eq!(users_endpoint("https://api.example.com/"), "https://api.example.com/users");
        assert_eq!(users_endpoint(""), "/users");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingRequired.to_string(),
            "Name, Roll Number, and Gender are required."
        );
        assert_eq!(
            SubmissionError::Transport("Network down".to_string()).to_string(),
            "Network down"
        );
    }
}
