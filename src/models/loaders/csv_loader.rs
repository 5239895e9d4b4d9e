use crate::error::{AppResult, InputError};
use crate::models::loaders::table::{build_table, InputTable};

/// 从任意 CSV 数据源解析查询
pub fn parse_queries<R: std::io::Read>(reader: R, origin: &str) -> AppResult<InputTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let csv_failed = |source: csv::Error| InputError::CsvFailed {
        path: origin.to_string(),
        source,
    };

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(csv_failed)?
        .iter()
        .map(str::to_string)
        .collect();

    let rows = csv_reader
        .records()
        .map(|result| result.map(|record| record.iter().map(str::to_string).collect()))
        .collect::<Result<Vec<Vec<String>>, _>>()
        .map_err(csv_failed)?;

    build_table(headers, rows)
}
