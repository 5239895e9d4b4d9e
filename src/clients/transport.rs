//! HTTP 传输层
//!
//! `AnswerClient` 只依赖 `Transport` trait，测试中可注入假实现。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

/// 一次 POST 请求
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: JsonValue,
    pub timeout: Duration,
}

/// 2xx 响应
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// 响应体；无法解析为 JSON 时为原始文本
    pub body: JsonValue,
}

/// 传输层错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
    /// 服务端返回非 2xx
    #[error("{message}")]
    Status { code: u16, message: String },
    /// 连接失败等没有状态码的错误
    #[error("{0}")]
    Network(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// 基于 reqwest 的实现
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .http
            .post(&request.url)
            .timeout(request.timeout)
            .json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify(e, request.timeout))?;

        let status = response.status();
        debug!("HTTP 状态码: {}", status);

        let text = response
            .text()
            .await
            .map_err(|e| classify(e, request.timeout))?;

        if !status.is_success() {
            let preview: String = text.chars().take(500).collect();
            debug!("错误响应内容: {}", preview);
            let reason = status.canonical_reason().unwrap_or("");
            return Err(TransportError::Status {
                code: status.as_u16(),
                message: format!(
                    "{} {} for url: {}",
                    status.as_u16(),
                    reason,
                    request.url
                ),
            });
        }

        let body = serde_json::from_str(&text).unwrap_or(JsonValue::String(text));

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(timeout.as_secs());
    }
    match err.status() {
        Some(status) => TransportError::Status {
            code: status.as_u16(),
            message: err.to_string(),
        },
        None => TransportError::Network(err.to_string()),
    }
}
