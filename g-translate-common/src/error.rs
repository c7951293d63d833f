use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("request api failed: {status}, message: {message}")]
    HttpStatus { status: StatusCode, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
