//! # Schedule Sheet Bulk
//!
//! 把一批行事曆记录写入工作表：直接追加，或按 (週次, 時間, 課程, 老師) 比对后更新
//!
//! ## 架构设计
//!
//! ### ① 存储层（Store）
//! - `store/` - 工作表抽象，处理器只借用，不拥有
//! - `MemoryWorkbook` - 内存实现，可从 JSON / TOML 文件加载
//!
//! ### ② 业务能力层（Services）
//! - `ColumnAliases` - 表头别名，解析关键栏位的位置
//! - `RowMatcher` - 在已有行中查找关键值相同的行
//!
//! ### ③ 流程层（Workflow）
//! - `RecordCtx` - 上下文封装（项目序号 + 工作表）
//! - `RecordFlow` - 单条记录流程（校验 → 生成行 → 追加 / 覆盖）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 整批处理、错误隔离、统计
//! - `api::dispatch` - 按请求的 action 选择模式
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod store;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use api::dispatch;
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, StoreError};
pub use models::{BulkResponse, ProcessMode, ScheduleRecord};
pub use orchestrator::{BatchSummary, BulkProcessor};
pub use store::{MemorySheet, MemoryWorkbook, Sheet, SheetStore};
pub use workflow::{RecordCtx, RecordFlow, RecordOutcome};
