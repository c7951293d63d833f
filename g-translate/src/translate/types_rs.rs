use crate::translate::Client;
use bon::Builder;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;

// region    --- common enums
/// 源文本的格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Html,
    #[default]
    Text,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Text => "text",
        }
    }
}

/// 翻译模型
///
/// 如果选择`Nmt`但是语言对不支持，服务端会退回到`Base`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Base,
    Nmt,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Base => "base",
            Model::Nmt => "nmt",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl FromStr for Format {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(Format::Html),
            "text" => Ok(Format::Text),
            _ => Err(ParseEnumError {
                kind: "format",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for Model {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Model::Base),
            "nmt" => Ok(Model::Nmt),
            _ => Err(ParseEnumError {
                kind: "model",
                value: s.to_owned(),
            }),
        }
    }
}
// endregion --- common enums

// region    --- translate
#[derive(Builder)]
pub struct Translate<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    pub(crate) text: &'a str,
    pub(crate) target: &'a str,
    /// 不设置则由服务端自动识别，请求里会带上空的`source`
    pub(crate) source: Option<&'a str>,
    #[builder(default)]
    pub(crate) format: Format,
    #[builder(default)]
    pub(crate) model: Model,
    pub(crate) cancel: Option<&'a CancellationToken>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TranslateResponse {
    pub data: TranslateData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TranslateData {
    pub translations: Vec<Translation>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
    /// 只有在请求没有指定source时才会返回
    pub detected_source_language: Option<String>,
    pub model: Option<String>,
}
// endregion --- translate

// region    --- detect language
#[derive(Builder)]
pub struct Detect<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    pub(crate) text: &'a str,
    pub(crate) cancel: Option<&'a CancellationToken>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct DetectResponse {
    pub data: DetectData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct DetectData {
    // 外层每个元素对应一个输入文本，内层是候选语种
    pub detections: Vec<Vec<Detection>>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub language: String,
    pub is_reliable: bool,
    /// 0 到 1
    pub confidence: f32,
}
// endregion --- detect language

// region    --- languages
#[derive(Builder)]
pub struct ListLanguages<'a> {
    #[builder(start_fn)]
    pub(crate) client: &'a Client,
    /// 返回的语种名称用这个语种来显示
    #[builder(default = "en")]
    pub(crate) target: &'a str,
    #[builder(default)]
    pub(crate) model: Model,
    pub(crate) cancel: Option<&'a CancellationToken>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct LanguagesResponse {
    pub data: LanguagesData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct LanguagesData {
    pub languages: Vec<Language>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Language {
    #[serde(rename = "language")]
    pub code: String,
    pub name: Option<String>,
}
// endregion --- languages
