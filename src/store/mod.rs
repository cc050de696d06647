//! 表格存储层
//!
//! 处理器不拥有工作表，只通过这里的两个 trait 读取、追加和覆盖行。
//! 行号统一从1开始，第1行是表头。

pub mod memory;

pub use memory::{MemorySheet, MemoryWorkbook};

use crate::error::StoreResult;
use crate::models::Row;

/// 单个工作表的能力
pub trait Sheet {
    /// 工作表名称
    fn name(&self) -> &str;

    /// 读取全部数据（包含表头）
    fn values(&self) -> StoreResult<Vec<Row>>;

    /// 读取表头；空表返回空行
    fn header(&self) -> StoreResult<Row> {
        Ok(self.values()?.into_iter().next().unwrap_or_default())
    }

    /// 在最后一行之后追加
    fn append_row(&mut self, row: Row) -> StoreResult<()>;

    /// 从第一栏开始覆盖第 `row_number` 行的 `row.len()` 个单元格
    fn write_row(&mut self, row_number: usize, row: Row) -> StoreResult<()>;

    /// 当前行数（包含表头）
    fn row_count(&self) -> usize;
}

/// 按名称查找工作表
pub trait SheetStore {
    fn sheet_by_name(&mut self, name: &str) -> StoreResult<Option<&mut dyn Sheet>>;
}
