//! 响应解析服务 - 业务能力层
//!
//! 从接口响应中提取答案文本和去重后的引用标题。纯函数，不会失败。

use crate::models::{CitationTitles, ExtractedAnswer, RequestOutcome};
use serde_json::Value as JsonValue;

/// 找不到答案字段时的标记
pub const NO_ANSWER_FOUND: &str = "No answer found in response";
/// 失败结果没有错误信息时的标记
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// 提取答案和引用标题
pub fn extract(outcome: &RequestOutcome) -> ExtractedAnswer {
    let Some(payload) = outcome.payload() else {
        return ExtractedAnswer {
            answer: outcome.error_message().unwrap_or(UNKNOWN_ERROR).to_string(),
            titles: CitationTitles::new(),
        };
    };

    let answer = find_answer(payload)
        .map(render_answer)
        .unwrap_or_else(|| NO_ANSWER_FOUND.to_string());

    let mut titles = CitationTitles::new();
    titles.extend(collect_titles(payload));

    ExtractedAnswer { answer, titles }
}

/// 先找 `response.answer`，再找顶层 `answer`
fn find_answer(payload: &JsonValue) -> Option<&JsonValue> {
    payload
        .get("response")
        .and_then(|response| response.get("answer"))
        .or_else(|| payload.get("answer"))
}

fn render_answer(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// 遍历 `response.answer_payload.center_panel.data[*].snippet_content[*].sources[*].title`
///
/// 任何一层缺失或类型不对都只是"这一支没有标题"。
fn collect_titles(payload: &JsonValue) -> Vec<&str> {
    let items = payload
        .get("response")
        .and_then(|r| r.get("answer_payload"))
        .and_then(|p| p.get("center_panel"))
        .and_then(|c| c.get("data"))
        .and_then(JsonValue::as_array);

    let Some(items) = items else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| item.get("snippet_content").and_then(JsonValue::as_array))
        .flatten()
        .filter_map(|content| content.get("sources").and_then(JsonValue::as_array))
        .flatten()
        .filter_map(|source| source.get("title").and_then(JsonValue::as_str))
        .filter(|title| !title.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StatusCode, NO_TITLES_FOUND};
    use serde_json::json;

    fn ok(payload: JsonValue) -> RequestOutcome {
        RequestOutcome::Succeeded {
            status: 200,
            payload,
        }
    }

    fn full_payload() -> JsonValue {
        json!({
            "response": {
                "answer": "Employees get 15 days of PTO.",
                "answer_payload": {
                    "center_panel": {
                        "data": [
                            {
                                "snippet_content": [
                                    {"sources": [{"title": "A"}, {"title": "B"}]},
                                    {"sources": [{"title": ""}, {"url": "no-title"}]}
                                ]
                            },
                            {
                                "snippet_content": [
                                    {"sources": [{"title": "A"}, {"title": "C"}]}
                                ]
                            }
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn test_nested_answer_and_deduped_titles() {
        let extracted = extract(&ok(full_payload()));
        assert_eq!(extracted.answer, "Employees get 15 days of PTO.");
        assert_eq!(extracted.titles.as_slice(), &["A", "B", "C"]);
        assert_eq!(extracted.titles_joined(), "A; B; C");
    }

    #[test]
    fn test_top_level_answer_fallback() {
        let extracted = extract(&ok(json!({"answer": "top", "response": {"other": 1}})));
        assert_eq!(extracted.answer, "top");
        assert!(extracted.titles.is_empty());
        assert_eq!(extracted.titles_joined(), NO_TITLES_FOUND);
    }

    #[test]
    fn test_nested_answer_wins_over_top_level() {
        let extracted = extract(&ok(json!({"answer": "top", "response": {"answer": "nested"}})));
        assert_eq!(extracted.answer, "nested");
    }

    #[test]
    fn test_no_answer_marker() {
        let extracted = extract(&ok(json!({"something": "else"})));
        assert_eq!(extracted.answer, NO_ANSWER_FOUND);
    }

    #[test]
    fn test_failed_outcome_uses_error_message() {
        let failed = RequestOutcome::Failed {
            status: StatusCode::Timeout,
            error: Some("Request timed out after 30 seconds".to_string()),
        };
        let extracted = extract(&failed);
        assert_eq!(extracted.answer, "Request timed out after 30 seconds");
        assert!(extracted.titles.is_empty());

        let no_message = RequestOutcome::Failed {
            status: StatusCode::NetworkError,
            error: None,
        };
        assert_eq!(extract(&no_message).answer, UNKNOWN_ERROR);
    }

    #[test]
    fn test_malformed_shapes_never_fail() {
        let shapes = vec![
            json!(null),
            json!("plain text body"),
            json!([1, 2, 3]),
            json!({"response": "not an object"}),
            json!({"response": {"answer": "x", "answer_payload": []}}),
            json!({"response": {"answer": "x", "answer_payload": {"center_panel": {"data": {}}}}}),
            json!({"response": {"answer": "x", "answer_payload": {"center_panel": {"data": [1, "s", null]}}}}),
            json!({"response": {"answer": "x", "answer_payload": {"center_panel": {"data": [
                {"snippet_content": "oops"},
                {"snippet_content": [{"sources": {"title": "not a list"}}]},
                {"snippet_content": [{"sources": [{"title": 7}, "str", {"title": "Kept"}]}]}
            ]}}}}),
        ];

        for shape in shapes {
            let extracted = extract(&ok(shape.clone()));
            let mut seen = std::collections::HashSet::new();
            assert!(
                extracted.titles.as_slice().iter().all(|t| seen.insert(t.clone())),
                "duplicate titles for {}",
                shape
            );
        }

        let last = extract(&ok(json!({"response": {"answer": "x", "answer_payload": {"center_panel": {"data": [
            {"snippet_content": [{"sources": [{"title": 7}, "str", {"title": "Kept"}]}]}
        ]}}}})));
        assert_eq!(last.answer, "x");
        assert_eq!(last.titles.as_slice(), &["Kept"]);
    }

    #[test]
    fn test_non_string_answer_is_rendered() {
        let extracted = extract(&ok(json!({"response": {"answer": {"text": "hi"}}})));
        assert_eq!(extracted.answer, r#"{"text":"hi"}"#);

        let null_answer = extract(&ok(json!({"answer": null})));
        assert_eq!(null_answer.answer, "");
    }

    #[test]
    fn test_extract_is_repeatable() {
        let outcome = ok(full_payload());
        assert_eq!(extract(&outcome), extract(&outcome));
    }
}
