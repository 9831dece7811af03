use permatrix_core::AppError;
use reqwest::StatusCode;

/// Maps a non-success response from a remote service onto an application error.
pub(crate) fn error_for_status(status: StatusCode, body: String, operation: &str) -> AppError {
    let detail = if body.trim().is_empty() {
        format!("{operation} failed with status {status}")
    } else {
        format!("{operation} failed with status {status}: {body}")
    };

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AppError::Validation(detail),
        StatusCode::NOT_FOUND => AppError::NotFound(detail),
        StatusCode::CONFLICT => AppError::Conflict(detail),
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(detail),
        StatusCode::FORBIDDEN => AppError::Forbidden(detail),
        _ => AppError::Upstream(detail),
    }
}

/// Reads the body of a failed response and converts it into an error.
pub(crate) async fn error_for_response(response: reqwest::Response, operation: &str) -> AppError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<response body unavailable>".to_owned());
    error_for_status(status, body, operation)
}
