use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::models::cell::{overwrite_cells, text_row};
use crate::models::{Row, ScheduleField};
use crate::store::{Sheet, SheetStore};

/// 内存中的工作表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySheet {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl MemorySheet {
    /// 创建空表（没有表头）
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// 创建只有表头的工作表
    pub fn with_header(name: impl Into<String>, header: &[&str]) -> Self {
        Self {
            name: name.into(),
            rows: vec![text_row(header)],
        }
    }

    /// 使用默认的本地表头（週次、節次 ...）
    pub fn with_schedule_header(name: impl Into<String>) -> Self {
        let header: Vec<&str> = ScheduleField::ALL.iter().map(|f| f.local_name()).collect();
        Self::with_header(name, &header)
    }

    /// 数据行（不含表头）
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }
}

impl Sheet for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> StoreResult<Vec<Row>> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, row: Row) -> StoreResult<()> {
        self.rows.push(row);
        Ok(())
    }

    fn write_row(&mut self, row_number: usize, row: Row) -> StoreResult<()> {
        let len = self.rows.len();
        let target = row_number
            .checked_sub(1)
            .and_then(|idx| self.rows.get_mut(idx))
            .ok_or(StoreError::RowOutOfRange {
                row: row_number,
                len,
            })?;
        overwrite_cells(target, row);
        Ok(())
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// 内存中的工作簿
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryWorkbook {
    #[serde(default)]
    pub sheets: Vec<MemorySheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, sheet: MemorySheet) -> Self {
        self.sheets.push(sheet);
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&MemorySheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// 所有工作表的总行数
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows.len()).sum()
    }
}

impl SheetStore for MemoryWorkbook {
    fn sheet_by_name(&mut self, name: &str) -> StoreResult<Option<&mut dyn Sheet>> {
        Ok(self
            .sheets
            .iter_mut()
            .find(|s| s.name == name)
            .map(|s| s as &mut dyn Sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CellValue;

    #[test]
    fn write_row_uses_one_based_numbers() {
        let mut sheet = MemorySheet::with_header("行事曆", &["週次", "時間"]);
        sheet.append_row(text_row(&["1", "09:00"])).unwrap();

        sheet.write_row(2, text_row(&["2", "10:00"])).unwrap();
        assert_eq!(sheet.data_rows(), &[text_row(&["2", "10:00"])]);

        assert_eq!(
            sheet.write_row(0, text_row(&["x"])),
            Err(StoreError::RowOutOfRange { row: 0, len: 2 })
        );
        assert_eq!(
            sheet.write_row(3, text_row(&["x"])),
            Err(StoreError::RowOutOfRange { row: 3, len: 2 })
        );
    }

    #[test]
    fn header_of_empty_sheet_is_empty() {
        let sheet = MemorySheet::new("空表");
        assert!(sheet.header().unwrap().is_empty());
        assert!(sheet.data_rows().is_empty());
    }

    #[test]
    fn workbook_finds_sheets_by_exact_name() {
        let mut workbook = MemoryWorkbook::new().with_sheet(MemorySheet::with_schedule_header("行事曆"));
        assert!(workbook.sheet_by_name("行事曆").unwrap().is_some());
        assert!(workbook.sheet_by_name("行事历").unwrap().is_none());

        let header = workbook.sheet("行事曆").unwrap().header().unwrap();
        assert_eq!(header[0], CellValue::text("週次"));
        assert_eq!(header.len(), 8);
    }
}
