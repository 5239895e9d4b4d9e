//! 查询处理上下文
//!
//! 封装"我正在处理第几条查询"这一信息，仅用于日志

use std::fmt::Display;

/// 查询处理上下文
#[derive(Debug, Clone, Copy)]
pub struct QueryCtx {
    /// 本批中的位置（从1开始）
    pub position: usize,
    /// 本批查询总数
    pub total: usize,
    /// 输入文件中的数据行号
    pub row_number: usize,
}

impl QueryCtx {
    pub fn new(position: usize, total: usize, row_number: usize) -> Self {
        Self {
            position,
            total,
            row_number,
        }
    }

    /// 是否为本批最后一条
    pub fn is_last(&self) -> bool {
        self.position >= self.total
    }
}

impl Display for QueryCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}]", self.position, self.total)
    }
}
