//! 输入查询

/// 输入表中的一行查询
///
/// 读取后不可变。`columns` 保存原始行的全部单元格，写出结果时原样带回。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// 数据行号（从1开始，不含表头）
    pub row_number: usize,
    /// 查询文本（非空）
    pub text: String,
    /// 期望的来源文档（可选）
    pub expected_source: Option<String>,
    /// 原始单元格
    pub columns: Vec<String>,
}

impl Query {
    /// 创建只有文本和期望来源的查询（无原始列）
    pub fn new(text: impl Into<String>, expected_source: Option<&str>) -> Self {
        let text = text.into();
        let expected_source = expected_source
            .map(str::to_string)
            .filter(|s| !s.is_empty());
        Self {
            row_number: 0,
            columns: vec![text.clone(), expected_source.clone().unwrap_or_default()],
            text,
            expected_source,
        }
    }

    /// 设置行号
    pub fn with_row_number(mut self, row_number: usize) -> Self {
        self.row_number = row_number;
        self
    }

    /// 是否提供了期望来源
    pub fn has_expected_source(&self) -> bool {
        self.expected_source.is_some()
    }
}
