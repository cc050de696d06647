//! 记录处理流程 - 流程层
//!
//! 核心职责：定义"一条记录"的完整处理流程
//!
//! 流程顺序：
//! 1. 解析 item → 检查必填栏位（缺少则跳过）
//! 2. 生成行数据（带时间戳）
//! 3. 直接追加，或比对后覆盖 / 追加

use chrono::{DateTime, FixedOffset};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::ScheduleRecord;
use crate::services::RowMatcher;
use crate::store::Sheet;
use crate::utils::logging::preview_item;
use crate::workflow::record_ctx::RecordCtx;

/// 时钟：返回写入行时使用的时间戳
pub type Clock = fn() -> DateTime<FixedOffset>;

/// 单条记录的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// 追加了新行
    Inserted,
    /// 覆盖了已有的行
    Updated,
    /// 缺少必填栏位，未写入
    Skipped,
}

/// 记录处理流程
///
/// - 不持有工作表，每次调用时借用
/// - 比对模式下由调用方传入 `RowMatcher`
pub struct RecordFlow {
    clock: Clock,
    verbose_logging: bool,
}

impl RecordFlow {
    pub fn new(clock: Clock, verbose_logging: bool) -> Self {
        Self {
            clock,
            verbose_logging,
        }
    }

    /// 处理一条记录
    ///
    /// `matcher` 为 None 时直接追加
    pub fn run(
        &self,
        sheet: &mut dyn Sheet,
        matcher: Option<&mut RowMatcher>,
        item: &JsonValue,
        ctx: &RecordCtx,
    ) -> AppResult<RecordOutcome> {
        let record = ScheduleRecord::from_value(item)
            .map_err(|e| AppError::item_failed(ctx.item_number, e))?;

        let Some(key) = record.match_key() else {
            info!("{} 跳过：缺少必要栏位 {:?}", ctx, record.missing_fields());
            if self.verbose_logging {
                debug!("{} 原始资料: {}", ctx, preview_item(item, 120));
            }
            return Ok(RecordOutcome::Skipped);
        };

        let row = record.to_row((self.clock)());

        let Some(matcher) = matcher else {
            sheet
                .append_row(row)
                .map_err(|e| AppError::item_failed(ctx.item_number, e))?;
            info!("{} 已新增: {}", ctx, record.summary());
            return Ok(RecordOutcome::Inserted);
        };

        match matcher.find(&key) {
            Some(row_number) => {
                sheet
                    .write_row(row_number, row.clone())
                    .map_err(|e| AppError::item_failed(ctx.item_number, e))?;
                matcher.record_update(row_number, row);
                info!("{} 已更新第 {} 行: {}", ctx, row_number, record.summary());
                Ok(RecordOutcome::Updated)
            }
            None => {
                sheet
                    .append_row(row.clone())
                    .map_err(|e| AppError::item_failed(ctx.item_number, e))?;
                matcher.record_append(row);
                info!("{} 已新增: {}", ctx, record.summary());
                Ok(RecordOutcome::Inserted)
            }
        }
    }
}
