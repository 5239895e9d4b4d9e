use crate::error::{AppResult, InputError};
use crate::models::loaders::table::{build_table, InputTable};
use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;

/// 从 Excel 工作簿解析查询，只读取第一个工作表
pub fn parse_workbook(bytes: Vec<u8>, origin: &str) -> AppResult<InputTable> {
    let workbook_failed = |source: calamine::XlsxError| InputError::WorkbookFailed {
        path: origin.to_string(),
        source,
    };

    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).map_err(workbook_failed)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InputError::EmptyWorkbook {
            path: origin.to_string(),
        })?
        .map_err(workbook_failed)?;

    let mut rows = range
        .rows()
        .map(|cells| cells.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();

    build_table(headers, rows)
}

/// 单元格转文本；空单元格为空字符串，数字按最短形式显示
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
