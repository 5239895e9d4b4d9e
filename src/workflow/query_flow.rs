//! 查询处理流程 - 流程层
//!
//! 核心职责：定义"一条查询"的完整处理流程
//!
//! 流程顺序：
//! 1. 调用接口
//! 2. 解析答案和引用标题
//! 3. 有期望来源时做来源匹配，否则 N/A
//! 4. 生成结果记录

use std::time::Instant;
use tracing::{debug, info};

use crate::clients::AnswerClient;
use crate::models::record::round_secs;
use crate::models::{MatchVerdict, Query, ResultRecord};
use crate::services::{extract, match_source};
use crate::utils::logging::truncate_text;
use crate::workflow::query_ctx::QueryCtx;

/// 控制台答案预览长度
const ANSWER_PREVIEW_CHARS: usize = 150;

/// 查询处理流程
///
/// - 不持有任何可变状态
/// - 每次 `run` 产生且只产生一条 `ResultRecord`
pub struct QueryFlow {
    client: AnswerClient,
}

impl QueryFlow {
    /// 创建新的查询处理流程
    pub fn new(client: AnswerClient) -> Self {
        Self { client }
    }

    pub async fn run(&self, query: &Query, ctx: &QueryCtx) -> ResultRecord {
        info!("\n{} 第 {} 行，正在处理: {}", ctx, ctx.row_number, query.text);
        if let Some(source) = &query.expected_source {
            info!("  期望来源: {}", source);
        }

        let started = Instant::now();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let outcome = self.client.invoke(&query.text).await;
        let extracted = extract(&outcome);
        let processing_time_seconds = round_secs(started.elapsed().as_secs_f64());

        let response_titles = extracted.titles_joined();
        let source_match = match query.expected_source.as_deref() {
            Some(expected) if !expected.is_empty() => match_source(expected, &response_titles),
            _ => MatchVerdict::NotApplicable,
        };

        if outcome.succeeded() {
            info!("  状态: 成功");
            info!(
                "  答案预览: {}",
                truncate_text(&extracted.answer, ANSWER_PREVIEW_CHARS)
            );
            info!("  引用标题数: {}", extracted.titles.len());
            if query.has_expected_source() {
                info!("  来源匹配: {}", source_match);
            }
        } else {
            info!("  状态: 失败 ({})", outcome.status_code());
        }
        info!("  处理耗时: {:.2}s", processing_time_seconds);
        debug!("  引用标题: {}", response_titles);

        ResultRecord {
            columns: query.columns.clone(),
            row_number: query.row_number,
            query: query.text.clone(),
            expected_source: query.expected_source.clone(),
            api_success: outcome.succeeded(),
            status_code: outcome.status_code(),
            answer: extracted.answer,
            response_titles,
            source_match,
            timestamp,
            processing_time_seconds,
        }
    }
}
