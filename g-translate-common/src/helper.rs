use crate::Error;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

// RFC 3986 unreserved characters stay as they are, everything else is escaped
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// 把参数按给定顺序编码为query string
///
/// eg: `[("q", "a b+c")]` -> `q=a%20b%2Bc`
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, QUERY_ENCODE_SET),
                utf8_percent_encode(v, QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Joins `path` onto `base_url` and attaches the encoded `params` as the query.
///
/// Any query or fragment already present on `base_url` is replaced.
pub fn build_request_url(
    base_url: &str,
    path: &str,
    params: &[(&str, &str)],
) -> Result<Url, Error> {
    let mut u = Url::parse(base_url)
        .map_err(|e| Error::InvalidRequest(format!("url parsed failed: {}: {}", base_url, e)))?;
    if u.cannot_be_a_base() || !matches!(u.scheme(), "http" | "https") {
        return Err(Error::InvalidRequest(format!(
            "unsupported base url: {}",
            base_url
        )));
    }
    u.set_fragment(None);
    let full_path = format!("{}{}", u.path().trim_end_matches('/'), path);
    u.set_path(&full_path);
    u.set_query(Some(&encode_query(params)));
    Ok(u)
}

pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    // 状态码已经决定了错误类型，body读不出来也不影响
    let message = resp.text().await.unwrap_or_default();
    tracing::warn!(%status, "request api failed");
    Error::HttpStatus { status, message }
}

pub async fn parse_json_response<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();

    if !status.is_success() {
        return Err(into_request_failed_error(resp).await);
    }

    let bytes = resp.bytes().await?;
    let data = serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!(error = %e, "response body does not match the expected shape");
        Error::MalformedResponse(format!(
            "parse response json error: {}, response text: {}",
            e,
            String::from_utf8_lossy(&bytes)
        ))
    })?;
    Ok(data)
}
