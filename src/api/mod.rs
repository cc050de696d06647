//! 请求入口
//!
//! 请求体里的 `action` 决定处理模式，未带 `action` 时使用配置的默认模式。

use serde_json::Value as JsonValue;
use tracing::warn;

use crate::models::{BulkResponse, ProcessMode};
use crate::orchestrator::{BatchSummary, BulkProcessor};
use crate::store::SheetStore;

/// 按 action 分发请求
pub fn dispatch(
    processor: &BulkProcessor,
    request: &JsonValue,
    store: &mut dyn SheetStore,
    default_mode: ProcessMode,
) -> BulkResponse {
    dispatch_with_summary(processor, request, store, default_mode).0
}

/// 同 `dispatch`，额外返回批次统计
pub fn dispatch_with_summary(
    processor: &BulkProcessor,
    request: &JsonValue,
    store: &mut dyn SheetStore,
    default_mode: ProcessMode,
) -> (BulkResponse, Option<BatchSummary>) {
    let mode = match request.get("action").and_then(JsonValue::as_str) {
        Some(action) => match ProcessMode::from_action(action) {
            Some(mode) => mode,
            None => {
                warn!("⚠️ 未知的操作: {}", action);
                return (BulkResponse::failed(format!("未知的操作: {}", action)), None);
            }
        },
        None => default_mode,
    };

    processor.process_batch_with_summary(request, store, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ACTION_BULK, ACTION_BULK_ADVANCED};
    use crate::store::{MemorySheet, MemoryWorkbook};
    use serde_json::json;

    fn workbook() -> MemoryWorkbook {
        MemoryWorkbook::new().with_sheet(MemorySheet::with_schedule_header("行事曆"))
    }

    fn item() -> JsonValue {
        json!({"week": "一", "time": "09:00", "course": "數學", "teacher": "李"})
    }

    #[test]
    fn simple_action_appends_duplicates() {
        let processor = BulkProcessor::new("行事曆");
        let mut store = workbook();
        let request = json!({"action": ACTION_BULK, "items": [item()]});

        dispatch(&processor, &request, &mut store, ProcessMode::MatchAndUpdate);
        let response = dispatch(&processor, &request, &mut store, ProcessMode::MatchAndUpdate);

        assert_eq!(response.inserted, Some(1));
        assert_eq!(response.message, "批量处理成功");
        assert_eq!(store.sheet("行事曆").unwrap().data_rows().len(), 2);
    }

    #[test]
    fn advanced_action_updates_in_place() {
        let processor = BulkProcessor::new("行事曆");
        let mut store = workbook();
        let request = json!({"action": ACTION_BULK_ADVANCED, "items": [item()]});

        dispatch(&processor, &request, &mut store, ProcessMode::SimpleAppend);
        let response = dispatch(&processor, &request, &mut store, ProcessMode::SimpleAppend);

        assert_eq!(response.updated, Some(1));
        assert_eq!(response.message, "高级批量处理成功");
        assert_eq!(store.sheet("行事曆").unwrap().data_rows().len(), 1);
    }

    #[test]
    fn missing_action_uses_default_mode() {
        let processor = BulkProcessor::new("行事曆");
        let mut store = workbook();
        let request = json!({"items": [item(), item()]});

        let response = dispatch(&processor, &request, &mut store, ProcessMode::MatchAndUpdate);

        assert_eq!(response.inserted, Some(1));
        assert_eq!(response.updated, Some(1));
    }

    #[test]
    fn unknown_action_touches_nothing() {
        let processor = BulkProcessor::new("行事曆");
        let mut store = workbook();
        let request = json!({"action": "getTeacherList", "items": [item()]});

        let response = dispatch(&processor, &request, &mut store, ProcessMode::SimpleAppend);

        assert!(!response.success);
        assert!(response.message.contains("getTeacherList"));
        assert_eq!(store, workbook());
    }
}
