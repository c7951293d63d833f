use crate::credentials::CredentialsError;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 网络层错误（DNS、连接、TLS、超时、读取body）
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request api failed: {status}, message: {message}")]
    HttpStatus { status: StatusCode, message: String },
    /// 状态码成功，但是返回的json结构不对
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// The HTTP status of a non-2xx response, `None` for every other kind.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<g_translate_common::Error> for Error {
    fn from(e: g_translate_common::Error) -> Self {
        match e {
            g_translate_common::Error::HttpStatus { status, message } => {
                Error::HttpStatus { status, message }
            }
            g_translate_common::Error::MalformedResponse(msg) => Error::MalformedResponse(msg),
            g_translate_common::Error::InvalidRequest(msg) => Error::InvalidRequest(msg),
            g_translate_common::Error::Reqwest(e) => Error::Transport(e),
        }
    }
}

impl From<CredentialsError> for Error {
    fn from(e: CredentialsError) -> Self {
        Error::Config(e.to_string())
    }
}
