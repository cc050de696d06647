use crate::store::MemoryWorkbook;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 工作簿文件格式，按扩展名判断
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookFormat {
    Json,
    Toml,
}

impl WorkbookFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(WorkbookFormat::Json),
            Some("toml") => Ok(WorkbookFormat::Toml),
            other => anyhow::bail!(
                "不支持的工作簿格式 {:?}: {}",
                other.unwrap_or_default(),
                path.display()
            ),
        }
    }
}

/// 从 JSON 或 TOML 文件加载工作簿
pub async fn load_workbook(path: &Path) -> Result<MemoryWorkbook> {
    let format = WorkbookFormat::from_path(path)?;

    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取工作簿文件: {}", path.display()))?;

    let workbook: MemoryWorkbook = match format {
        WorkbookFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("无法解析JSON工作簿: {}", path.display()))?,
        WorkbookFormat::Toml => toml::from_str(&content)
            .with_context(|| format!("无法解析TOML工作簿: {}", path.display()))?,
    };

    tracing::info!(
        "成功加载工作簿 {}: {} 个工作表, 共 {} 行",
        path.display(),
        workbook.sheets.len(),
        workbook.total_rows()
    );

    Ok(workbook)
}

/// 把工作簿写回文件，格式与扩展名一致
pub async fn save_workbook(workbook: &MemoryWorkbook, path: &Path) -> Result<()> {
    let content = match WorkbookFormat::from_path(path)? {
        WorkbookFormat::Json => serde_json::to_string_pretty(workbook)?,
        WorkbookFormat::Toml => toml::to_string_pretty(workbook)
            .with_context(|| format!("无法序列化TOML工作簿: {}", path.display()))?,
    };

    fs::write(path, content)
        .await
        .with_context(|| format!("无法写入工作簿文件: {}", path.display()))?;

    tracing::debug!("工作簿已保存: {}", path.display());
    Ok(())
}
