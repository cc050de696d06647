//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **结构校验**：请求必须带 items 数组，否则不碰工作表
//! 2. **定位工作表**：按配置的名称查找，找不到直接失败
//! 3. **逐条处理**：按输入顺序委托给 `RecordFlow`
//! 4. **错误隔离**：单条失败只记日志，不中断整批
//! 5. **统计输出**：汇总新增 / 更新 / 跳过 / 失败
//!
//! 所有错误都转换成 `BulkResponse`，不会向调用方抛出。

use chrono::{DateTime, FixedOffset, Local};
use serde_json::Value as JsonValue;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{BulkRequest, BulkResponse, ProcessMode};
use crate::services::{ColumnAliases, RowMatcher};
use crate::store::SheetStore;
use crate::workflow::{Clock, RecordCtx, RecordFlow, RecordOutcome};

/// 批次统计
///
/// `inserted + updated + skipped + failed == total`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total: usize,
}

impl BatchSummary {
    /// 是否有行被写入
    pub fn changed(&self) -> bool {
        self.inserted + self.updated > 0
    }
}

fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// 批量处理器
pub struct BulkProcessor {
    sheet_name: String,
    aliases: ColumnAliases,
    clock: Clock,
    verbose_logging: bool,
}

impl BulkProcessor {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            aliases: ColumnAliases::default(),
            clock: local_now,
            verbose_logging: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            sheet_name: config.sheet_name.clone(),
            aliases: config.column_aliases.clone(),
            clock: local_now,
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn with_aliases(mut self, aliases: ColumnAliases) -> Self {
        self.aliases = aliases;
        self
    }

    /// 替换时间戳来源
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// 处理一批记录，结果总是以响应对象返回
    pub fn process_batch(
        &self,
        batch: &JsonValue,
        store: &mut dyn SheetStore,
        mode: ProcessMode,
    ) -> BulkResponse {
        self.process_batch_with_summary(batch, store, mode).0
    }

    /// 同 `process_batch`，额外返回统计（失败时为 None）
    pub fn process_batch_with_summary(
        &self,
        batch: &JsonValue,
        store: &mut dyn SheetStore,
        mode: ProcessMode,
    ) -> (BulkResponse, Option<BatchSummary>) {
        info!("开始{}批量处理行事曆资料 → 工作表 {}", mode, self.sheet_name);

        match self.try_process(batch, store, mode) {
            Ok(summary) => {
                log_batch_complete(&summary);
                let response = BulkResponse::succeeded(
                    mode.success_message(),
                    summary.inserted,
                    summary.updated,
                    summary.total,
                );
                (response, Some(summary))
            }
            Err(e @ (AppError::InvalidInput(_) | AppError::TableNotFound { .. })) => {
                error!("❌ {}", e);
                (BulkResponse::failed(e.to_string()), None)
            }
            Err(e) => {
                error!("❌ {}: {}", mode.failure_prefix(), e);
                (
                    BulkResponse::failed(format!("{}: {}", mode.failure_prefix(), e)),
                    None,
                )
            }
        }
    }

    fn try_process(
        &self,
        batch: &JsonValue,
        store: &mut dyn SheetStore,
        mode: ProcessMode,
    ) -> AppResult<BatchSummary> {
        let request = BulkRequest::from_value(batch)?;
        let items = &request.items;
        info!("准备处理 {} 个行事曆项目", items.len());

        let sheet = store
            .sheet_by_name(&self.sheet_name)?
            .ok_or_else(|| AppError::TableNotFound {
                sheet: self.sheet_name.clone(),
            })?;

        let mut matcher = match mode {
            ProcessMode::MatchAndUpdate => Some(RowMatcher::load(&*sheet, &self.aliases)?),
            ProcessMode::SimpleAppend => None,
        };

        let flow = RecordFlow::new(self.clock, self.verbose_logging);
        let mut summary = BatchSummary {
            total: items.len(),
            ..Default::default()
        };

        for (index, item) in items.iter().enumerate() {
            let ctx = RecordCtx::new(index + 1, items.len(), &self.sheet_name);

            match flow.run(&mut *sheet, matcher.as_mut(), item, &ctx) {
                Ok(RecordOutcome::Inserted) => summary.inserted += 1,
                Ok(RecordOutcome::Updated) => summary.updated += 1,
                Ok(RecordOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    error!("{} ❌ {}", ctx, e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

fn log_batch_complete(summary: &BatchSummary) {
    info!(
        "✓ 批量处理完成：新增 {} 个，更新 {} 个，跳过 {} 个，失败 {} 个（共 {} 个）",
        summary.inserted, summary.updated, summary.skipped, summary.failed, summary.total
    );
}
