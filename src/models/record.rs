//! 结果记录与汇总统计

use crate::models::{MatchVerdict, StatusCode};
use serde::Serialize;

/// 输出表追加的列名
pub const RESULT_COLUMNS: [&str; 7] = [
    "API_Success",
    "Status_Code",
    "Answer",
    "Response_Titles",
    "Source_Match",
    "Timestamp",
    "Processing_Time_Seconds",
];

/// 一条查询的处理结果
///
/// 每条查询只创建一次，追加到结果列表后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// 输入行的原始单元格
    #[serde(skip)]
    pub columns: Vec<String>,
    pub row_number: usize,
    pub query: String,
    pub expected_source: Option<String>,
    pub api_success: bool,
    pub status_code: StatusCode,
    pub answer: String,
    pub response_titles: String,
    pub source_match: MatchVerdict,
    pub timestamp: String,
    pub processing_time_seconds: f64,
}

impl ResultRecord {
    /// 追加列的单元格值，顺序与 `RESULT_COLUMNS` 一致
    pub fn result_cells(&self) -> [String; 7] {
        [
            if self.api_success { "YES" } else { "NO" }.to_string(),
            self.status_code.to_string(),
            self.answer.clone(),
            self.response_titles.clone(),
            self.source_match.to_string(),
            self.timestamp.clone(),
            format!("{:.2}", self.processing_time_seconds),
        ]
    }
}

/// 保留两位小数
pub fn round_secs(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

/// 整批运行的汇总，只由结果列表推导
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub matched: usize,
    pub not_matched: usize,
    pub not_applicable: usize,
}

impl RunSummary {
    pub fn from_records(records: &[ResultRecord]) -> Self {
        records.iter().fold(
            RunSummary {
                total: records.len(),
                ..Default::default()
            },
            |mut acc, record| {
                if record.api_success {
                    acc.succeeded += 1;
                } else {
                    acc.failed += 1;
                }
                match record.source_match {
                    MatchVerdict::Yes => acc.matched += 1,
                    MatchVerdict::No => acc.not_matched += 1,
                    MatchVerdict::NotApplicable => acc.not_applicable += 1,
                }
                acc
            },
        )
    }

    /// 成功率（百分比）
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.succeeded as f64 / self.total as f64 * 100.0
    }

    /// 来源匹配率（百分比），N/A 不计入分母；没有可比较的行时为 None
    pub fn match_rate(&self) -> Option<f64> {
        let compared = self.matched + self.not_matched;
        if compared == 0 {
            return None;
        }
        Some(self.matched as f64 / compared as f64 * 100.0)
    }
}
