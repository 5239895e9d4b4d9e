//! 示例输入文件生成

use crate::error::{AppError, AppResult, OutputError};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::info;

/// 默认示例文件路径
pub const SAMPLE_PATH: &str = "input/sample_queries.xlsx";

const SAMPLE_HEADERS: [&str; 2] = ["query", "source"];

const SAMPLE_ROWS: [(&str, &str); 5] = [
    (
        "What is the company's code of conduct?",
        "Kore.ai-US-Handbook.pdf (pp. 5-7)",
    ),
    (
        "How do I report harassment?",
        "Kore.ai-US-Handbook.pdf (pp. 12-14)",
    ),
    (
        "What are equal opportunity policies?",
        "Kore.ai-US-Handbook.pdf (pp. 8-10)",
    ),
    ("Outside employment policy?", "Kore.ai-US-Handbook.pdf (p. 11)"),
    ("Confidentiality rules?", "Kore.ai-US-Handbook.pdf (pp. 15-16)"),
];

/// 写出示例查询文件（`.xlsx` 或 `.csv`），返回文件路径
pub fn create_sample_input(path: &Path) -> AppResult<PathBuf> {
    let path_str = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") | Some("xlsx") => {}
        _ => return Err(OutputError::UnsupportedExtension { path: path_str }.into()),
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::write_failed(parent.display().to_string(), e))?;
    }

    match extension.as_deref() {
        Some("xlsx") => write_xlsx_sample(path, &path_str)?,
        _ => write_csv_sample(path, &path_str)?,
    }

    info!("✓ 示例输入文件已生成: {}", path_str);
    Ok(path.to_path_buf())
}

fn write_csv_sample(path: &Path, path_str: &str) -> AppResult<()> {
    let csv_failed = |source: csv::Error| OutputError::CsvFailed {
        path: path_str.to_string(),
        source,
    };

    let mut wtr = csv::Writer::from_path(path).map_err(csv_failed)?;
    wtr.write_record(SAMPLE_HEADERS).map_err(csv_failed)?;
    for (query, source) in SAMPLE_ROWS {
        wtr.write_record([query, source]).map_err(csv_failed)?;
    }
    wtr.flush().map_err(|e| AppError::write_failed(path_str, e))?;
    Ok(())
}

fn write_xlsx_sample(path: &Path, path_str: &str) -> AppResult<()> {
    let xlsx_failed = |source: rust_xlsxwriter::XlsxError| OutputError::XlsxFailed {
        path: path_str.to_string(),
        source,
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in SAMPLE_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).map_err(xlsx_failed)?;
    }
    for (idx, (query, source)) in SAMPLE_ROWS.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, *query).map_err(xlsx_failed)?;
        sheet.write_string(row, 1, *source).map_err(xlsx_failed)?;
    }
    workbook.save(path).map_err(xlsx_failed)?;
    Ok(())
}
