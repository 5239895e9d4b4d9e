//! 输入表：列识别与空行过滤
//!
//! CSV 和 Excel 读取器都把数据交给这里，保证两种格式的规则一致。

use crate::error::{AppResult, InputError};
use crate::models::query::Query;

/// 可识别的查询列名（不区分大小写）
const QUERY_COLUMNS: [&str; 2] = ["query", "queries"];
/// 可识别的期望来源列名（不区分大小写）
const SOURCE_COLUMNS: [&str; 4] = ["source_url", "source_urls", "sourceurl", "source"];

/// 读取后的输入表
#[derive(Debug, Clone)]
pub struct InputTable {
    /// 原始表头（不做修剪，原样写回输出）
    pub headers: Vec<String>,
    /// 查询列名
    pub query_column: String,
    /// 期望来源列名
    pub source_column: Option<String>,
    /// 过滤空查询后的有效行
    pub queries: Vec<Query>,
}

/// 由表头和数据行构建输入表
///
/// 行号从 1 开始，按数据行（不含表头）计算。
pub(crate) fn build_table<I>(headers: Vec<String>, rows: I) -> AppResult<InputTable>
where
    I: IntoIterator<Item = Vec<String>>,
{
    // 同名列出现多次时以最后一个为准
    let mut query_idx = None;
    let mut source_idx = None;
    for (idx, header) in headers.iter().enumerate() {
        let name = header.trim().to_lowercase();
        if QUERY_COLUMNS.contains(&name.as_str()) {
            query_idx = Some(idx);
        } else if SOURCE_COLUMNS.contains(&name.as_str()) {
            source_idx = Some(idx);
        }
    }

    let query_idx = query_idx.ok_or_else(|| InputError::MissingQueryColumn {
        found: headers.clone(),
    })?;

    tracing::info!("✓ 找到查询列: '{}'", headers[query_idx]);
    match source_idx {
        Some(idx) => tracing::info!("✓ 找到期望来源列: '{}'", headers[idx]),
        None => tracing::warn!(
            "⚠️ 没有找到 'source_url' 列，将跳过来源比对。现有列: {:?}",
            headers
        ),
    }

    let mut queries = Vec::new();
    for (row_idx, mut columns) in rows.into_iter().enumerate() {
        columns.resize(headers.len(), String::new());

        let text = columns[query_idx].clone();
        if text.trim().is_empty() {
            continue;
        }

        let expected_source = source_idx
            .map(|idx| columns[idx].clone())
            .filter(|s| !s.is_empty());

        queries.push(Query {
            row_number: row_idx + 1,
            text,
            expected_source,
            columns,
        });
    }

    if queries.is_empty() {
        return Err(InputError::NoValidRows.into());
    }

    tracing::info!("✓ 共 {} 条有效查询", queries.len());

    Ok(InputTable {
        query_column: headers[query_idx].clone(),
        source_column: source_idx.map(|idx| headers[idx].clone()),
        headers,
        queries,
    })
}
