use derive_more::{Display, Error};
use ntex::{http, web};

/// Errors raised while reading the startup configuration
#[derive(Debug, Display, Error, PartialEq)]
pub enum ConfigError {
    #[display("missing required value: {_0}")]
    MissingValue(#[error(not(source))] String),
    #[display("invalid gateway base url: {_0}")]
    InvalidBaseUrl(#[error(not(source))] String),
    #[display("unknown responder '{_0}', expected 'keyword' or 'echo'")]
    UnknownResponder(#[error(not(source))] String),
}

/// Errors returned to HTTP callers
#[derive(Debug, Display, Error)]
pub enum UserError {
    #[display("Not Found")]
    UrlNotFound,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, req: &web::HttpRequest) -> web::HttpResponse {
        logfire::warn!(
            "{method} {path} -> {error}",
            method = req.method().to_string(),
            path = req.path().to_string(),
            error = self.to_string()
        );

        web::HttpResponse::build(self.status_code())
            .json(&serde_json::json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
        }
    }
}
