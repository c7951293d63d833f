use super::Client;
use super::Error;
use super::types_rs::*;
use super::utils::{check_not_blank, check_not_empty};
use reqwest::Method;

impl Client {
    /// 文本翻译
    ///
    /// > <a href="https://cloud.google.com/translate/docs/reference/rest/v2/translate" target="_blank">api文档地址</a>
    ///
    /// 注意：不做重试，也不检查文本长度
    pub fn translate(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    /// > <a href="https://cloud.google.com/translate/docs/reference/rest/v2/detect" target="_blank">api文档地址</a>
    pub fn detect(&self) -> DetectBuilder<'_> {
        Detect::builder(self)
    }

    /// > <a href="https://cloud.google.com/translate/docs/reference/rest/v2/languages" target="_blank">api文档地址</a>
    pub fn list_languages(&self) -> ListLanguagesBuilder<'_> {
        ListLanguages::builder(self)
    }
}

impl Translate<'_> {
    /// Returns the first translated text of the response.
    pub async fn send(&self) -> Result<String, Error> {
        let translation = self.send_detailed().await?;
        Ok(translation.translated_text)
    }

    /// Like [`Translate::send`], but keeps the detected source language and the model
    /// reported by the service.
    pub async fn send_detailed(&self) -> Result<Translation, Error> {
        check_not_empty("text", self.text)?;
        check_not_blank("target", self.target)?;

        let params = [
            ("q", self.text),
            ("target", self.target),
            ("source", self.source.unwrap_or_default()),
            ("format", self.format.as_str()),
            ("model", self.model.as_str()),
        ];

        let res: TranslateResponse = self
            .client
            .execute(Method::POST, "", &params, self.cancel)
            .await?;

        let translation = res.data.translations.into_iter().next().ok_or_else(|| {
            tracing::warn!("translate response has no translations");
            Error::MalformedResponse("data.translations is empty".to_owned())
        })?;
        tracing::debug!(
            detected_source_language = translation.detected_source_language.as_deref(),
            "translate succeeded"
        );
        Ok(translation)
    }
}

impl Detect<'_> {
    /// 外层（每个输入文本）和内层（候选语种）按原顺序展开为一个列表
    pub async fn send(&self) -> Result<Vec<Detection>, Error> {
        check_not_empty("text", self.text)?;

        let res: DetectResponse = self
            .client
            .execute(Method::POST, "/detect", &[("q", self.text)], self.cancel)
            .await?;

        let detections: Vec<Detection> = res.data.detections.into_iter().flatten().collect();
        tracing::debug!(count = detections.len(), "detect succeeded");
        Ok(detections)
    }
}

impl ListLanguages<'_> {
    /// 按服务端返回的顺序，不排序
    pub async fn send(&self) -> Result<Vec<Language>, Error> {
        let params = [("target", self.target), ("model", self.model.as_str())];

        let res: LanguagesResponse = self
            .client
            .execute(Method::GET, "/languages", &params, self.cancel)
            .await?;

        if let Some(pos) = res.data.languages.iter().position(|l| l.code.is_empty()) {
            tracing::warn!(index = pos, "languages response has an empty language code");
            return Err(Error::MalformedResponse(format!(
                "data.languages[{}].language is empty",
                pos
            )));
        }

        tracing::debug!(count = res.data.languages.len(), "list languages succeeded");
        Ok(res.data.languages)
    }
}
