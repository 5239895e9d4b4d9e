//! 从响应中提取出的答案与引用标题

use serde::Serialize;

/// 没有任何标题时在输出表中使用的哨兵值
pub const NO_TITLES_FOUND: &str = "No titles found";

/// 有序、去重的引用标题列表
///
/// 按首次出现的顺序保存，区分大小写的精确去重，空字符串不入列。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CitationTitles(Vec<String>);

impl CitationTitles {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加标题；为空或已存在时忽略
    pub fn push(&mut self, title: &str) {
        if title.is_empty() || self.0.iter().any(|t| t == title) {
            return;
        }
        self.0.push(title.to_string());
    }

    pub fn extend<'a, I>(&mut self, titles: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for title in titles {
            self.push(title);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// 以 "; " 连接；列表为空时返回哨兵值
    pub fn joined(&self) -> String {
        if self.0.is_empty() {
            NO_TITLES_FOUND.to_string()
        } else {
            self.0.join("; ")
        }
    }
}

/// 提取结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAnswer {
    /// 答案文本；请求失败时为错误信息
    pub answer: String,
    /// 引用标题
    pub titles: CitationTitles,
}

impl ExtractedAnswer {
    pub fn titles_joined(&self) -> String {
        self.titles.joined()
    }
}
