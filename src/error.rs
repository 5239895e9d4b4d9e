//! 错误类型
//!
//! 只有"整批无法开始"或"结果无法落盘"才是 `AppError`。
//! 单条请求的网络失败、超时、响应结构异常都作为数据写进结果表，不在这里出现。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入文件错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 输出文件错误
    #[error("输出错误: {0}")]
    Output(#[from] OutputError),
}

/// 输入文件错误（在发出任何请求之前报告）
#[derive(Debug, Error)]
pub enum InputError {
    /// 文件不存在
    #[error("Input file '{path}' not found")]
    FileNotFound { path: String },
    /// 不支持的文件扩展名
    #[error("Input file must be .csv or .xlsx format (got '{path}')")]
    UnsupportedExtension { path: String },
    /// 缺少 query 列
    #[error("Input file must contain a 'query' column, found columns: {found:?}")]
    MissingQueryColumn { found: Vec<String> },
    /// 过滤空行后没有有效查询
    #[error("No valid queries found in the input file")]
    NoValidRows,
    /// 读取失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// CSV 解析失败
    #[error("CSV 解析失败 ({path}): {source}")]
    CsvFailed {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// Excel 工作簿解析失败
    #[error("Excel 解析失败 ({path}): {source}")]
    WorkbookFailed {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },
    /// 工作簿中没有工作表
    #[error("Excel 文件中没有工作表 ({path})")]
    EmptyWorkbook { path: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必填凭据缺失
    #[error("缺少必填凭据 {var_name}（请设置环境变量或在配置文件中填写）")]
    MissingCredential { var_name: String },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("无法解析配置文件 {path}: {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 输出文件错误
#[derive(Debug, Error)]
pub enum OutputError {
    /// 不支持的输出格式
    #[error("Output file must be .csv, .xlsx or .json format (got '{path}')")]
    UnsupportedExtension { path: String },
    /// 写入失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// CSV 写入失败
    #[error("CSV 写入失败 ({path}): {source}")]
    CsvFailed {
        path: String,
        #[source]
        source: csv::Error,
    },
    /// Excel 写入失败
    #[error("Excel 写入失败 ({path}): {source}")]
    XlsxFailed {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
    /// JSON 序列化失败
    #[error("JSON 序列化失败 ({path}): {source}")]
    SerializeFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建凭据缺失错误
    pub fn missing_credential(var_name: impl Into<String>) -> Self {
        AppError::Config(ConfigError::MissingCredential {
            var_name: var_name.into(),
        })
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Output(OutputError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 是否属于输入阶段的错误（尚未发出请求）
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::Input(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
