//! 批量查询处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **顺序执行**：按输入顺序逐条处理，同一时刻只有一个请求在途
//! 2. **节流**：相邻两条查询之间固定等待 `pacing`，最后一条之后不等待
//! 3. **结果累积**：每条查询追加一条 `ResultRecord`，追加后不再修改
//! 4. **全局统计**：全部完成后从结果列表推导 `RunSummary`
//!
//! 不做任何文件或控制台输出之外的副作用，读写文件属于 `App`。

use crate::models::{Query, ResultRecord, RunSummary};
use crate::workflow::{QueryCtx, QueryFlow};
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// 批量查询处理器
pub struct BatchOrchestrator {
    flow: QueryFlow,
}

impl BatchOrchestrator {
    pub fn new(flow: QueryFlow) -> Self {
        Self { flow }
    }

    /// 处理全部查询
    pub async fn run(&self, queries: &[Query], pacing: Duration) -> (Vec<ResultRecord>, RunSummary) {
        let total = queries.len();
        let mut records = Vec::with_capacity(total);

        for (idx, query) in queries.iter().enumerate() {
            let ctx = QueryCtx::new(idx + 1, total, query.row_number);

            let record = self.flow.run(query, &ctx).await;
            records.push(record);

            if !ctx.is_last() && !pacing.is_zero() {
                info!("  等待 {} 秒后处理下一条...", pacing.as_secs_f64());
                sleep(pacing).await;
            }
        }

        let summary = RunSummary::from_records(&records);
        (records, summary)
    }
}
