//! Google Cloud Translation v2: 文本翻译、语种识别、支持的语种列表
//!
//! [API 文档](https://cloud.google.com/translate/docs/reference/rest/v2/translate)

use crate::credentials::Credentials;
use bon::bon;
use std::time::Duration;

mod error;
pub use error::Error;

mod trans;
mod types_rs;
mod utils;
pub use types_rs::*;

pub const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Environment variable read by [`Client::from_env`] to override [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "GOOGLE_TRANSLATE_BASE_URL";

/// Translation client.
///
/// Cheap to clone; clones share the same connection pool. All operations take `&self`
/// and can run concurrently.
#[derive(Clone, Debug)]
pub struct Client {
    credentials: Credentials,
    http_client: reqwest::Client,
    base_url: String,
}

#[bon]
impl Client {
    /// - `base_url`: 默认为[`DEFAULT_BASE_URL`]
    /// - `timeout`: 整个请求的超时时间，不设置则使用reqwest的默认值
    /// - `http_client`: 自定义的reqwest client，设置后`timeout`不生效
    #[builder]
    pub fn new(
        #[builder(into)] credentials: Credentials,
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
        http_client: Option<reqwest::Client>,
    ) -> Result<Self, Error> {
        if credentials.is_empty() {
            return Err(Error::Config("api key cannot be empty".to_owned()));
        }

        let http_client = match http_client {
            Some(c) => c,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(t) = timeout {
                    builder = builder.timeout(t);
                }
                builder
                    .build()
                    .map_err(|e| Error::Config(format!("failed to build http client: {}", e)))?
            }
        };

        Ok(Self {
            credentials,
            http_client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        })
    }

    /// Builds a client from `GOOGLE_TRANSLATE_API_KEY` and, if set, `GOOGLE_TRANSLATE_BASE_URL`.
    pub fn from_env() -> Result<Self, Error> {
        let credentials = Credentials::from_env()?;
        Client::builder()
            .credentials(credentials)
            .maybe_base_url(std::env::var(BASE_URL_ENV).ok())
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
