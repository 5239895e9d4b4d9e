//! 编排层（Orchestration Layer）
//!
//! ```text
//! batch_processor (处理 Vec<Query>)
//!     ↓
//! workflow::QueryFlow (处理单条 Query)
//!     ↓
//! clients / services (调用接口、解析、匹配)
//! ```

pub mod batch_processor;

pub use batch_processor::BatchOrchestrator;
