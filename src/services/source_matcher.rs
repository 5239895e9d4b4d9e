//! 来源匹配服务 - 业务能力层
//!
//! 判断期望来源是否出现在接口返回的引用标题中。
//! 基于子串和关键词的廉价启发式，允许漏判，但规则必须稳定可复现。

use crate::models::{MatchVerdict, NO_TITLES_FOUND};
use once_cell::sync::Lazy;
use regex::Regex;

/// 页码标注，如 "(pp. 5-7)"、"(p. 11)"
static PAGE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([p.]*\s*\d+[-–]*\d*\)").expect("page range pattern"));

/// 文档关键词：(关键词, 命中条件)
///
/// 词表来自 Kore.ai 员工手册的命名方式，只适用于这一组文档。
const DOC_KEYWORDS: [(&str, &[&str]); 5] = [
    ("kore", &["kore.ai", "kore"]),
    ("handbook", &["handbook"]),
    ("us", &["us"]),
    ("uk", &["uk"]),
    ("staff", &["staff"]),
];

/// 比较期望来源和接口返回的标题串（"; " 分隔，或哨兵值）
pub fn match_source(expected_source: &str, response_titles: &str) -> MatchVerdict {
    if expected_source.trim().is_empty() || expected_source == NO_TITLES_FOUND {
        return MatchVerdict::NotApplicable;
    }

    if response_titles.is_empty() || response_titles == NO_TITLES_FOUND {
        return MatchVerdict::No;
    }

    let expected = normalize_expected(expected_source);
    let keywords = doc_keywords(&expected);
    let expected_stem = expected.replace(".pdf", "");
    let expected_parts: Vec<&str> = expected_stem.split('-').collect();

    let candidates = response_titles
        .split(';')
        .map(str::trim)
        .filter(|title| !title.is_empty());

    for title in candidates {
        let title = title.to_lowercase();
        let title = title.trim();

        if keywords.len() >= 2 {
            let hits = keywords.iter().filter(|kw| title.contains(*kw)).count();
            if hits >= 2 {
                return MatchVerdict::Yes;
            }
        }

        if title.contains(expected_stem.as_str()) {
            return MatchVerdict::Yes;
        }

        if expected_parts.len() > 1
            && expected_parts
                .iter()
                .any(|part| part.chars().count() > 3 && title.contains(part))
        {
            return MatchVerdict::Yes;
        }
    }

    MatchVerdict::No
}

/// 小写、去空白、去掉页码标注
fn normalize_expected(expected_source: &str) -> String {
    let lowered = expected_source.to_lowercase();
    PAGE_RANGE
        .replace_all(lowered.trim(), "")
        .trim()
        .to_string()
}

fn doc_keywords(expected: &str) -> Vec<&'static str> {
    DOC_KEYWORDS
        .iter()
        .filter(|(_, probes)| probes.iter().any(|probe| expected.contains(probe)))
        .map(|(keyword, _)| *keyword)
        .collect()
}
