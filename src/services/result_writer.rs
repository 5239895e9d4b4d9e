//! 结果写入服务 - 业务能力层
//!
//! 只负责把最终的结果列表投影成表格/报告写到磁盘

use crate::error::{AppError, AppResult, OutputError};
use crate::models::record::RESULT_COLUMNS;
use crate::models::{ResultRecord, RunSummary};
use rust_xlsxwriter::Workbook;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// JSON 报告的元数据
#[derive(Debug, Serialize)]
struct ReportMetadata<'a> {
    total_queries: usize,
    successful_calls: usize,
    failed_calls: usize,
    source_matches: usize,
    source_non_matches: usize,
    processed_at: String,
    api_url: &'a str,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    metadata: ReportMetadata<'a>,
    results: &'a [ResultRecord],
}

/// 结果写入服务
pub struct ResultWriter {
    api_url: String,
}

impl ResultWriter {
    /// 创建新的写入服务
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// 按扩展名写出：`.csv`/`.xlsx` 表格或 `.json` 报告
    ///
    /// 父目录不存在时会自动创建
    pub fn write(
        &self,
        path: &Path,
        headers: &[String],
        records: &[ResultRecord],
        summary: &RunSummary,
    ) -> AppResult<()> {
        let path_str = path.display().to_string();
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") | Some("xlsx") | Some("json") => {}
            _ => return Err(OutputError::UnsupportedExtension { path: path_str }.into()),
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::write_failed(parent.display().to_string(), e))?;
        }

        debug!("写入 {} 条结果到 {}", records.len(), path_str);

        match extension.as_deref() {
            Some("json") => self.write_json(path, records, summary),
            Some("xlsx") => write_xlsx(path, headers, records),
            _ => write_csv(path, headers, records),
        }
    }

    fn write_json(&self, path: &Path, records: &[ResultRecord], summary: &RunSummary) -> AppResult<()> {
        let path_str = path.display().to_string();
        let report = Report {
            metadata: ReportMetadata {
                total_queries: summary.total,
                successful_calls: summary.succeeded,
                failed_calls: summary.failed,
                source_matches: summary.matched,
                source_non_matches: summary.not_matched,
                processed_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                api_url: &self.api_url,
            },
            results: records,
        };

        let json = serde_json::to_string_pretty(&report).map_err(|source| {
            OutputError::SerializeFailed {
                path: path_str.clone(),
                source,
            }
        })?;
        std::fs::write(path, json).map_err(|e| AppError::write_failed(path_str, e))?;
        Ok(())
    }
}

/// 原始列 + 结果列
fn write_csv(path: &Path, headers: &[String], records: &[ResultRecord]) -> AppResult<()> {
    let path_str = path.display().to_string();
    let csv_failed = |source: csv::Error| OutputError::CsvFailed {
        path: path_str.clone(),
        source,
    };

    let mut wtr = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(csv_failed)?;

    wtr.write_record(header_row(headers)).map_err(csv_failed)?;
    for record in records {
        wtr.write_record(&table_row(headers, record)).map_err(csv_failed)?;
    }

    wtr.flush().map_err(|e| AppError::write_failed(path_str.clone(), e))?;
    Ok(())
}

/// 与 CSV 相同的列，写到第一个工作表
fn write_xlsx(path: &Path, headers: &[String], records: &[ResultRecord]) -> AppResult<()> {
    let path_str = path.display().to_string();
    let xlsx_failed = |source: rust_xlsxwriter::XlsxError| OutputError::XlsxFailed {
        path: path_str.clone(),
        source,
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in header_row(headers).enumerate() {
        sheet.write_string(0, col as u16, name).map_err(xlsx_failed)?;
    }
    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, cell) in table_row(headers, record).into_iter().enumerate() {
            sheet.write_string(row, col as u16, cell).map_err(xlsx_failed)?;
        }
    }

    workbook.save(path).map_err(xlsx_failed)?;
    Ok(())
}

fn header_row(headers: &[String]) -> impl Iterator<Item = &str> {
    headers
        .iter()
        .map(String::as_str)
        .chain(RESULT_COLUMNS.iter().copied())
}

/// 原始单元格（按表头长度补齐）+ 结果单元格
fn table_row(headers: &[String], record: &ResultRecord) -> Vec<String> {
    let mut row = record.columns.clone();
    row.resize(headers.len(), String::new());
    row.extend(record.result_cells());
    row
}
