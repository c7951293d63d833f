use super::Client;
use crate::translate::Error;
use g_translate_common::helper::{build_request_url, parse_json_response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::future::Future;
use tokio_util::sync::CancellationToken;

impl Client {
    /// 发送请求并解析json，`params`里不需要包含`key`
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
        cancel: Option<&CancellationToken>,
    ) -> Result<T, Error> {
        let mut query = Vec::with_capacity(params.len() + 1);
        query.push(("key", self.credentials.api_key()));
        query.extend_from_slice(params);

        let request_url = build_request_url(&self.base_url, path, &query)?;

        // url里带着key，只记录path
        tracing::debug!(%method, path = request_url.path(), "sending translate api request");

        let fut = async {
            let mut req = self.http_client.request(method.clone(), request_url);
            if method == Method::POST {
                // 参数都在query里，但是POST不带Content-Length会被返回411
                req = req.body("");
            }
            let resp = req.send().await?;
            let res = parse_json_response::<T>(resp).await?;
            Ok::<T, Error>(res)
        };

        with_cancel(fut, cancel).await
    }
}

pub(crate) async fn with_cancel<T>(
    fut: impl Future<Output = Result<T, Error>>,
    cancel: Option<&CancellationToken>,
) -> Result<T, Error> {
    match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!("translate api request cancelled");
                    Err(Error::Cancelled)
                }
                res = fut => res,
            }
        }
        None => fut.await,
    }
}

/// 空白字符也是合法的文本，这里只拒绝空字符串
pub(crate) fn check_not_empty(name: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::InvalidRequest(format!("{} cannot be empty", name)));
    }
    Ok(())
}

/// 语种代码不能是空白
pub(crate) fn check_not_blank(name: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidRequest(format!("{} cannot be blank", name)));
    }
    Ok(())
}
