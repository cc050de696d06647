use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{AppError, AppResult};

/// 直接追加的操作名称
pub const ACTION_BULK: &str = "addOrUpdateSchedulesLinkBulk";
/// 比对后更新或追加的操作名称
pub const ACTION_BULK_ADVANCED: &str = "addOrUpdateSchedulesLinkBulkAdvanced";

/// 处理模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessMode {
    /// 每条有效记录都追加为新行
    SimpleAppend,
    /// 按 (week, time, course, teacher) 比对，命中则覆盖，否则追加
    MatchAndUpdate,
}

impl ProcessMode {
    /// 根据请求里的 action 选择模式
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            ACTION_BULK => Some(ProcessMode::SimpleAppend),
            ACTION_BULK_ADVANCED => Some(ProcessMode::MatchAndUpdate),
            _ => None,
        }
    }

    /// 从配置字符串解析
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" | "append" | "simple_append" => Some(ProcessMode::SimpleAppend),
            "advanced" | "upsert" | "match_and_update" => Some(ProcessMode::MatchAndUpdate),
            _ => None,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            ProcessMode::SimpleAppend => "批量处理成功",
            ProcessMode::MatchAndUpdate => "高级批量处理成功",
        }
    }

    pub fn failure_prefix(self) -> &'static str {
        match self {
            ProcessMode::SimpleAppend => "批量处理失败",
            ProcessMode::MatchAndUpdate => "高级批量处理失败",
        }
    }
}

impl std::fmt::Display for ProcessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessMode::SimpleAppend => write!(f, "直接追加"),
            ProcessMode::MatchAndUpdate => write!(f, "比对更新"),
        }
    }
}

/// 批量请求 `{ action?, items: [...] }`
///
/// items 保持原始 JSON，逐条解析，单条失败不影响整批
#[derive(Debug, Clone, PartialEq)]
pub struct BulkRequest {
    pub action: Option<String>,
    pub items: Vec<JsonValue>,
}

impl BulkRequest {
    /// 校验请求结构：必须是对象，且 items 必须是数组
    pub fn from_value(value: &JsonValue) -> AppResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| AppError::invalid_input("缺少 items 数组"))?;

        let items = object
            .get("items")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| AppError::invalid_input("缺少 items 数组"))?;

        Ok(Self {
            action: object
                .get("action")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            items: items.clone(),
        })
    }
}

/// 批量处理的返回值
///
/// 成功: `{success, message, inserted, updated, total}`；失败: `{success, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl BulkResponse {
    pub fn succeeded(
        message: impl Into<String>,
        inserted: usize,
        updated: usize,
        total: usize,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            inserted: Some(inserted),
            updated: Some(updated),
            total: Some(total),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            inserted: None,
            updated: None,
            total: None,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_must_be_an_array() {
        assert!(BulkRequest::from_value(&json!({})).is_err());
        assert!(BulkRequest::from_value(&json!({"items": "x"})).is_err());
        assert!(BulkRequest::from_value(&json!(null)).is_err());
        assert!(BulkRequest::from_value(&json!([1, 2])).is_err());

        let request = BulkRequest::from_value(&json!({"action": ACTION_BULK, "items": []})).unwrap();
        assert_eq!(request.action.as_deref(), Some(ACTION_BULK));
        assert!(request.items.is_empty());
    }

    #[test]
    fn failure_response_omits_counters() {
        let json = BulkResponse::failed("x").to_json();
        assert_eq!(json, json!({"success": false, "message": "x"}));
    }

    #[test]
    fn action_selects_mode() {
        assert_eq!(ProcessMode::from_action(ACTION_BULK), Some(ProcessMode::SimpleAppend));
        assert_eq!(
            ProcessMode::from_action(ACTION_BULK_ADVANCED),
            Some(ProcessMode::MatchAndUpdate)
        );
        assert_eq!(ProcessMode::from_action("getTeacherList"), None);
        assert_eq!(ProcessMode::from_str(" Advanced "), Some(ProcessMode::MatchAndUpdate));
    }
}
