pub mod csv_loader;
pub mod table;
pub mod xlsx_loader;

pub use csv_loader::parse_queries;
pub use table::InputTable;
pub use xlsx_loader::parse_workbook;

use crate::error::{AppResult, InputError};
use std::path::Path;
use tokio::fs;

/// 支持的输入格式
enum InputFormat {
    Csv,
    Xlsx,
}

/// 从 CSV 或 Excel 文件加载查询
pub async fn load_queries(path: &Path) -> AppResult<InputTable> {
    let path_str = path.display().to_string();

    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(InputError::FileNotFound { path: path_str }.into());
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    let format = match extension.as_deref() {
        Some("csv") => InputFormat::Csv,
        Some("xlsx") => InputFormat::Xlsx,
        _ => return Err(InputError::UnsupportedExtension { path: path_str }.into()),
    };

    let content = fs::read(path).await.map_err(|source| InputError::ReadFailed {
        path: path_str.clone(),
        source,
    })?;

    tracing::info!("正在读取查询文件: {}", path_str);
    match format {
        InputFormat::Csv => parse_queries(&content[..], &path_str),
        InputFormat::Xlsx => parse_workbook(content, &path_str),
    }
}
