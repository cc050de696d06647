use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::path::Path;
use tokio::fs;

/// 读取批量请求文件
///
/// 只做 JSON 解析，结构校验交给处理器，这样格式错误会以失败响应返回
pub async fn load_batch_file(path: &Path) -> Result<JsonValue> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取批量请求文件: {}", path.display()))?;

    let value: JsonValue = serde_json::from_str(&content)
        .with_context(|| format!("无法解析批量请求文件: {}", path.display()))?;

    let count = value
        .get("items")
        .and_then(JsonValue::as_array)
        .map_or(0, Vec::len);
    tracing::info!("已读取批量请求 {}: {} 个项目", path.display(), count);

    Ok(value)
}
