//! 单次请求结果

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::fmt;

/// 状态码：HTTP 状态码，或超时/网络错误哨兵值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Http(u16),
    Timeout,
    NetworkError,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Http(code) => write!(f, "{}", code),
            StatusCode::Timeout => f.write_str("TIMEOUT"),
            StatusCode::NetworkError => f.write_str("NETWORK_ERROR"),
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatusCode::Http(code) => serializer.serialize_u16(*code),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// 单次接口调用的结果，创建后不再修改
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// 调用成功（2xx），附带解析后的响应体
    Succeeded { status: u16, payload: JsonValue },
    /// 调用失败（超时、网络错误、非 2xx）
    Failed {
        status: StatusCode,
        error: Option<String>,
    },
}

impl RequestOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, RequestOutcome::Succeeded { .. })
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestOutcome::Succeeded { status, .. } => StatusCode::Http(*status),
            RequestOutcome::Failed { status, .. } => *status,
        }
    }

    /// 原始响应体（仅成功时存在）
    pub fn payload(&self) -> Option<&JsonValue> {
        match self {
            RequestOutcome::Succeeded { payload, .. } => Some(payload),
            RequestOutcome::Failed { .. } => None,
        }
    }

    /// 错误信息（仅失败时存在）
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestOutcome::Succeeded { .. } => None,
            RequestOutcome::Failed { error, .. } => error.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_code_rendering() {
        assert_eq!(StatusCode::Http(200).to_string(), "200");
        assert_eq!(StatusCode::Timeout.to_string(), "TIMEOUT");
        assert_eq!(StatusCode::NetworkError.to_string(), "NETWORK_ERROR");
        assert_eq!(serde_json::to_value(StatusCode::Http(404)).unwrap(), json!(404));
        assert_eq!(
            serde_json::to_value(StatusCode::Timeout).unwrap(),
            json!("TIMEOUT")
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = RequestOutcome::Succeeded {
            status: 200,
            payload: json!({"answer": "hi"}),
        };
        assert!(ok.succeeded());
        assert_eq!(ok.status_code(), StatusCode::Http(200));
        assert!(ok.payload().is_some());
        assert_eq!(ok.error_message(), None);

        let failed = RequestOutcome::Failed {
            status: StatusCode::Http(401),
            error: Some("401 Unauthorized".to_string()),
        };
        assert!(!failed.succeeded());
        assert_eq!(failed.status_code(), StatusCode::Http(401));
        assert_eq!(failed.payload(), None);
        assert_eq!(failed.error_message(), Some("401 Unauthorized"));
    }
}
