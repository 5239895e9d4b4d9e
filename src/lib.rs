//! # Answer Gen Tester
//!
//! 答案生成接口的批量测试工具：读取查询表，逐条调用接口，
//! 提取答案与引用标题，比对期望来源，输出带标注的结果表和汇总。
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/transport` - `Transport` trait 与 reqwest 实现，只负责收发 HTTP
//! - `clients/answer_client` - 组装请求头/请求体，把结果包装为 `RequestOutcome`
//!
//! ### ② 业务能力层（Services）
//! - `response_parser` - 提取答案文本和去重的引用标题
//! - `source_matcher` - 期望来源 vs 引用标题，给出 YES / NO / N/A
//! - `result_writer` / `sample_writer` - 写结果表、生成示例输入
//!
//! ### ③ 流程层（Workflow）
//! - `QueryFlow` - 单条查询：调用 → 解析 → 匹配 → 结果记录
//!
//! ### ④ 编排层（Orchestration）
//! - `BatchOrchestrator` - 顺序遍历、请求间节流、汇总统计
//! - `App` - 读输入 → 编排 → 写输出 → 打印汇总

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, RunReport};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{MatchVerdict, Query, RequestOutcome, ResultRecord, RunSummary};
pub use orchestrator::BatchOrchestrator;
pub use services::{extract, match_source};
