use crate::clients::{AnswerClient, ReqwestTransport, Transport};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_queries, ResultRecord, RunSummary};
use crate::orchestrator::BatchOrchestrator;
use crate::services::ResultWriter;
use crate::utils::logging;
use crate::workflow::QueryFlow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 一次完整运行的产出
#[derive(Debug)]
pub struct RunReport {
    pub records: Vec<ResultRecord>,
    pub summary: RunSummary,
    pub output_path: PathBuf,
}

/// 应用主结构
pub struct App {
    config: Config,
    orchestrator: BatchOrchestrator,
    writer: ResultWriter,
}

impl App {
    /// 使用真实 HTTP 传输初始化应用
    pub fn initialize(config: Config) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// 使用指定传输层初始化应用
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        logging::log_startup(&config.api_url, &config.account_id, &config.masked_token());

        let client = AnswerClient::new(&config, transport);
        let orchestrator = BatchOrchestrator::new(QueryFlow::new(client));
        let writer = ResultWriter::new(config.api_url.clone());

        Self {
            config,
            orchestrator,
            writer,
        }
    }

    /// 运行应用主逻辑
    ///
    /// 输入错误在发出任何请求之前返回，且不写输出文件
    pub async fn run(&self, input: &Path, output: Option<&Path>, delay: Duration) -> AppResult<RunReport> {
        let table = load_queries(input).await?;
        logging::log_queries_loaded(table.queries.len(), delay.as_secs_f64());

        let (records, summary) = self.orchestrator.run(&table.queries, delay).await;

        let output_path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.default_output_path());

        info!("\n正在写入结果: {}", output_path.display());
        self.writer
            .write(&output_path, &table.headers, &records, &summary)?;

        logging::print_final_stats(
            &summary,
            &records,
            table.source_column.is_some(),
            &output_path.display().to_string(),
        );

        Ok(RunReport {
            records,
            summary,
            output_path,
        })
    }

    /// `<output_dir>/answer_results_<时间戳>.csv`
    fn default_output_path(&self) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        Path::new(&self.config.output_dir).join(format!("answer_results_{}.csv", timestamp))
    }
}
