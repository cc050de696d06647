//! 记录处理上下文
//!
//! 封装"我正在处理这批的第几条"这一信息

use std::fmt::Display;

/// 记录处理上下文
#[derive(Debug, Clone)]
pub struct RecordCtx {
    /// 项目序号（从1开始，仅用于日志）
    pub item_number: usize,

    /// 本批项目总数
    pub total: usize,

    /// 目标工作表
    pub sheet_name: String,
}

impl RecordCtx {
    pub fn new(item_number: usize, total: usize, sheet_name: impl Into<String>) -> Self {
        Self {
            item_number,
            total,
            sheet_name: sheet_name.into(),
        }
    }
}

impl Display for RecordCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[项目 {}/{} @{}]", self.item_number, self.total, self.sheet_name)
    }
}
