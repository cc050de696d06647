//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! api::dispatch (按 action 选择模式)
//!     ↓
//! batch_processor (处理 Vec<item>)
//!     ↓
//! workflow::RecordFlow (处理单条记录)
//!     ↓
//! services (能力层：栏位映射 / 行比对)
//!     ↓
//! store (工作表)
//! ```
//!
//! 编排层只做调度和统计，不做具体的栏位判断。

pub mod batch_processor;

pub use batch_processor::{BatchSummary, BulkProcessor};
