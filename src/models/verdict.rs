//! 来源匹配结论

use serde::Serialize;
use std::fmt;

/// 来源匹配结论
///
/// `NotApplicable` 表示"没有可比较的期望来源"，与 `No` 不同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchVerdict {
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl MatchVerdict {
    /// 输出表中的字面值
    pub fn as_str(self) -> &'static str {
        match self {
            MatchVerdict::Yes => "YES",
            MatchVerdict::No => "NO",
            MatchVerdict::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
