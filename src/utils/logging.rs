/// 日志工具模块
///
/// 提供控制台横幅和汇总输出的辅助函数
use crate::models::{ResultRecord, RunSummary};
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `api_url`: 接口地址
/// - `account_id`: 账号 ID
/// - `masked_token`: 打码后的令牌
pub fn log_startup(api_url: &str, account_id: &str, masked_token: &str) {
    info!("{}", "=".repeat(70));
    info!("🚀 答案生成接口批量测试");
    info!("🔗 接口地址: {}", api_url);
    info!("👤 Account ID: {}", account_id);
    info!("🔑 Token: {}", masked_token);
    info!("{}", "=".repeat(70));
}

/// 记录查询加载信息
///
/// # 参数
/// - `total`: 查询总数
/// - `delay_secs`: 查询间隔（秒）
pub fn log_queries_loaded(total: usize, delay_secs: f64) {
    info!(
        "\n✓ 共 {} 条查询，每条之间间隔 {} 秒",
        total, delay_secs
    );
    info!("{}", "=".repeat(70));
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 汇总统计
/// - `records`: 全部结果（用于列出失败的查询）
/// - `compare_sources`: 输入是否带期望来源列
/// - `output_path`: 结果文件路径
pub fn print_final_stats(
    summary: &RunSummary,
    records: &[ResultRecord],
    compare_sources: bool,
    output_path: &str,
) {
    info!("\n{}", "=".repeat(70));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(70));
    info!("📝 总查询数: {}", summary.total);
    info!("✅ 成功: {}", summary.succeeded);
    info!("❌ 失败: {}", summary.failed);
    info!("📈 成功率: {:.1}%", summary.success_rate());

    if compare_sources {
        info!("🎯 来源匹配 (YES): {}", summary.matched);
        info!("🚫 来源不匹配 (NO): {}", summary.not_matched);
        if let Some(rate) = summary.match_rate() {
            info!("📈 来源匹配率: {:.1}%", rate);
        }
    }

    info!("💾 结果已保存至: {}", output_path);

    if summary.failed > 0 {
        info!("\n失败的查询:");
        for record in records.iter().filter(|r| !r.api_success) {
            info!("  - \"{}\" ({})", record.query, record.status_code);
        }
    }
    info!("{}", "=".repeat(70));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
