/// 程序配置
///
/// 进程启动时构造一次，之后只读；以引用传入各组件，不存在全局单例。
use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// 工作目录下的 dotenv 文件
pub const DOTENV_PATH: &str = ".env";

/// 默认的答案生成接口地址
pub const DEFAULT_API_URL: &str =
    "https://platform.kore.ai/api/1.1/builder/streams/st-cf495d40-5aca-5bde-9d8b-3fa910dcf9af/answer";

/// 程序配置
#[derive(Clone)]
pub struct Config {
    /// 答案生成接口地址
    pub api_url: String,
    /// 账号 ID（Accountid 请求头）
    pub account_id: String,
    /// Bearer 令牌
    pub bearer_token: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 默认输出目录
    pub output_dir: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("account_id", &self.account_id)
            .field("bearer_token", &self.masked_token())
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("verbose_logging", &self.verbose_logging)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

/// TOML 配置文件内容，所有字段可选
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub account_id: Option<String>,
    pub bearer_token: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub verbose_logging: Option<bool>,
    pub output_dir: Option<String>,
}

impl FileConfig {
    /// 从 TOML 文件读取
    pub fn load(path: &Path) -> AppResult<Self> {
        let path_str = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path_str.clone(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|source| {
            ConfigError::TomlParseFailed {
                path: path_str,
                source,
            }
        })?;
        Ok(file)
    }
}

impl Config {
    /// 从环境变量加载（可选叠加配置文件和 `.env`）
    ///
    /// 进程环境变量优先于 `.env` 中的同名项
    pub fn from_env(config_file: Option<&Path>) -> AppResult<Self> {
        let file = match config_file {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let dotenv = read_dotenv(Path::new(DOTENV_PATH));
        Self::from_sources(file, |name| {
            std::env::var(name).ok().or_else(|| dotenv.get(name).cloned())
        })
    }

    /// 按 默认值 → 配置文件 → 环境变量 的顺序合并
    pub fn from_sources<F>(file: FileConfig, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        let api_url = lookup("ANSWER_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let account_id = lookup("KORE_ACCOUNT_ID")
            .or(file.account_id)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::missing_credential("KORE_ACCOUNT_ID"))?;
        let bearer_token = lookup("KORE_BEARER_TOKEN")
            .or(file.bearer_token)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| AppError::missing_credential("KORE_BEARER_TOKEN"))?;
        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => parse_env("REQUEST_TIMEOUT_SECS", &v, "u64")?,
            None => file.request_timeout_secs.unwrap_or(30),
        };
        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(v) => parse_env("VERBOSE_LOGGING", &v, "bool")?,
            None => file.verbose_logging.unwrap_or(false),
        };
        let output_dir = lookup("OUTPUT_DIR")
            .or(file.output_dir)
            .unwrap_or_else(|| "output".to_string());

        Ok(Self {
            api_url,
            account_id,
            bearer_token,
            request_timeout_secs,
            verbose_logging,
            output_dir,
        })
    }

    /// 日志用的令牌预览，只保留首尾各 4 个字符
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.bearer_token.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// 读取 dotenv 文件；不存在或无法解析的行直接忽略
pub fn read_dotenv(path: &Path) -> HashMap<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(entries) => {
            let vars: HashMap<String, String> = entries.filter_map(Result::ok).collect();
            tracing::debug!("从 {} 读取了 {} 个变量", path.display(), vars.len());
            vars
        }
        Err(_) => HashMap::new(),
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        })
    })
}
