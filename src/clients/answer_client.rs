/// 答案生成接口客户端
///
/// 每条查询调用一次接口，把成功/失败统一包装为 `RequestOutcome`。不做自动重试。
use crate::clients::transport::{HttpRequest, Transport, TransportError};
use crate::config::Config;
use crate::models::{RequestOutcome, StatusCode};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("answer-gen-tester/", env!("CARGO_PKG_VERSION"));

/// 答案生成接口客户端
pub struct AnswerClient {
    transport: Arc<dyn Transport>,
    api_url: String,
    account_id: String,
    bearer_token: String,
    timeout: Duration,
}

impl AnswerClient {
    /// 创建新的客户端
    pub fn new(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            api_url: config.api_url.clone(),
            account_id: config.account_id.clone(),
            bearer_token: config.bearer_token.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// 发送一条查询
    ///
    /// 网络错误、超时、非 2xx 都不会返回 Err，而是 `RequestOutcome::Failed`
    pub async fn invoke(&self, query_text: &str) -> RequestOutcome {
        let request = self.build_request(query_text);
        debug!("POST {} (超时 {}s)", request.url, request.timeout.as_secs());

        match self.transport.post_json(&request).await {
            Ok(response) => {
                info!("  ✓ 接口调用成功 (HTTP {})", response.status);
                RequestOutcome::Succeeded {
                    status: response.status,
                    payload: response.body,
                }
            }
            Err(e) => {
                let status = match &e {
                    TransportError::Timeout(_) => StatusCode::Timeout,
                    TransportError::Status { code, .. } => StatusCode::Http(*code),
                    TransportError::Network(_) => StatusCode::NetworkError,
                };
                warn!("  ✗ 接口调用失败 ({}): {}", status, e);
                RequestOutcome::Failed {
                    status,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// 构建请求：JSON body 只有 query 字段
    fn build_request(&self, query_text: &str) -> HttpRequest {
        let headers = vec![
            ("Accountid".to_string(), self.account_id.clone()),
            (
                "Authorization".to_string(),
                format!("bearer {}", self.bearer_token),
            ),
            ("App-Language".to_string(), "en".to_string()),
            ("state".to_string(), "configured".to_string()),
            (
                "Accept".to_string(),
                "application/json, text/plain, */*".to_string(),
            ),
            (
                "Content-Type".to_string(),
                "application/json;charset=UTF-8".to_string(),
            ),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ];

        HttpRequest {
            url: self.api_url.clone(),
            headers,
            body: json!({ "query": query_text }),
            timeout: self.timeout,
        }
    }
}
