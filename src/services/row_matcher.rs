//! 现有行比对 - 业务能力层
//!
//! 批次开始时读取一次工作表快照，之后由处理器同步自己的写入，
//! 不再回读工作表。

use tracing::debug;

use crate::error::AppResult;
use crate::models::cell::overwrite_cells;
use crate::models::{MatchKey, Row};
use crate::services::column_mapping::{ColumnAliases, ColumnMap};
use crate::store::Sheet;

/// 工作表快照 + 关键栏位映射
#[derive(Debug, Clone)]
pub struct RowMatcher {
    /// 全部行（第0个是表头）
    rows: Vec<Row>,
    columns: ColumnMap,
}

impl RowMatcher {
    /// 读取工作表并解析表头
    ///
    /// 没有表头的空表同样报 `ColumnNotFound`，在写入任何行之前失败；
    /// 否则追加的第一行会落在表头的位置上
    pub fn load(sheet: &dyn Sheet, aliases: &ColumnAliases) -> AppResult<Self> {
        let header = sheet.header()?;
        let columns = aliases.resolve(&header)?;
        let rows = sheet.values()?;

        debug!(
            "工作表 {} 快照: {} 行, 栏位映射 {:?}",
            sheet.name(),
            rows.len(),
            columns
        );

        Ok(Self { rows, columns })
    }

    /// 第一个关键值相同的数据行的行号（从1开始，表头是第1行）
    pub fn find(&self, key: &MatchKey<'_>) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, row)| self.columns.matches(row, key))
            .map(|(idx, _)| idx + 1)
    }

    /// 记录一次追加
    pub fn record_append(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// 记录一次覆盖
    pub fn record_update(&mut self, row_number: usize, row: Row) {
        if let Some(target) = row_number.checked_sub(1).and_then(|idx| self.rows.get_mut(idx)) {
            overwrite_cells(target, row);
        }
    }
}
