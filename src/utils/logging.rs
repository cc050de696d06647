//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use serde_json::Value as JsonValue;
use tracing::info;

use crate::config::Config;
use crate::orchestrator::BatchSummary;

const RULE_WIDTH: usize = 60;

/// 日志文件开头：本次运行的时间和输入输出位置
pub fn log_file_header(config: &Config, started_at: DateTime<FixedOffset>) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n行事曆批量处理日志 @ {}\n工作表: {} | 模式: {}\n请求: {}\n工作簿: {}\n{rule}\n\n",
        started_at.format("%Y-%m-%d %H:%M:%S %:z"),
        config.sheet_name,
        config.default_mode,
        config.batch_file,
        config.workbook_path,
    )
}

/// 覆盖写入日志文件，只保留本次运行的内容
pub async fn init_log_file(config: &Config) -> Result<()> {
    let header = log_file_header(config, Local::now().fixed_offset());
    tokio::fs::write(&config.output_log_file, header)
        .await
        .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 行事曆批量处理");
    info!("📄 工作簿: {}", config.workbook_path);
    info!("📋 工作表: {}", config.sheet_name);
    info!("⚙️ 默认模式: {}", config.default_mode);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `summary`: 批次统计
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(summary: &BatchSummary, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("➕ 新增: {}", summary.inserted);
    info!("✏️ 更新: {}", summary.updated);
    info!("⏭️ 跳过: {}", summary.skipped);
    info!("❌ 失败: {}", summary.failed);
    info!("📦 总数: {}", summary.total);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 请求项目的单行预览，超过 `max_chars` 个字符时截断并注明原长度
pub fn preview_item(item: &JsonValue, max_chars: usize) -> String {
    let text = item.to_string();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…（共 {} 字）", &text[..cut], text.chars().count()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn preview_cuts_on_char_boundary() {
        let item = json!({"course": "數學"});
        assert_eq!(preview_item(&item, 64), r#"{"course":"數學"}"#);
        assert_eq!(preview_item(&item, 12), r#"{"course":"數…（共 15 字）"#);
    }

    #[test]
    fn header_names_run_inputs() {
        let started_at = FixedOffset::east_opt(8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 9, 2, 8, 30, 0)
            .unwrap();
        let header = log_file_header(&Config::default(), started_at);

        assert!(header.contains("行事曆批量处理日志 @ 2024-09-02 08:30:00 +08:00"));
        assert!(header.contains("工作表: 行事曆 | 模式: 比对更新"));
        assert!(header.contains("请求: batch.json"));
        assert!(header.ends_with("\n\n"));
    }
}
