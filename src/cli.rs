use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
#[derive(Debug, Parser)]
#[command(
    name = "answer-gen-tester",
    version,
    about = "Batch tester for the Kore.ai Answer Generation API"
)]
pub struct Cli {
    /// 输入 CSV 或 XLSX 文件（需要 query 列，可选 source 列）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 输出文件（.csv、.xlsx 或 .json），默认 output/answer_results_<时间戳>.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 两次请求之间的间隔（秒）
    #[arg(short, long, default_value_t = 1)]
    pub delay: u64,

    /// 生成示例输入文件后退出
    #[arg(long)]
    pub create_sample: bool,

    /// TOML 配置文件
    #[arg(long, env = "ANSWER_TESTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// 输出 debug 日志
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["answer-gen-tester", "-i", "input/queries.csv"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("input/queries.csv")));
        assert_eq!(cli.delay, 1);
        assert!(cli.output.is_none());
        assert!(!cli.create_sample);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "answer-gen-tester",
            "--input",
            "q.csv",
            "--output",
            "out/r.json",
            "--delay",
            "3",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out/r.json")));
        assert_eq!(cli.delay, 3);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_negative_delay() {
        assert!(Cli::try_parse_from(["answer-gen-tester", "-d", "-1"]).is_err());
    }
}
