use thiserror::Error;

/// 应用程序错误类型
///
/// 批量处理只在循环之外向调用方报告错误；
/// 单条记录的失败使用 `ItemProcessing` 包装并在本地吞掉。
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求格式错误（缺少 items 数组）
    #[error("资料格式错误：{0}")]
    InvalidInput(String),

    /// 指定名称的工作表不存在
    #[error("找不到名为 \"{sheet}\" 的工作表")]
    TableNotFound { sheet: String },

    /// 表头中找不到关键字段
    #[error("表头中找不到栏位 {field}（尝试过: {}）", .aliases.join(", "))]
    ColumnNotFound { field: String, aliases: Vec<String> },

    /// 处理单条记录失败
    #[error("处理项目 {index} 失败: {source}")]
    ItemProcessing {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// 循环之外的存储错误
    #[error("存储错误: {0}")]
    FatalStore(#[from] StoreError),
}

/// 表格存储错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 工作表无法访问
    #[error("工作表 {sheet} 无法访问: {reason}")]
    Unavailable { sheet: String, reason: String },

    /// 行号超出范围（行号从1开始，包含表头）
    #[error("行号 {row} 超出范围 [1, {len}]")]
    RowOutOfRange { row: usize, len: usize },

    /// 写入被拒绝
    #[error("写入被拒绝: {0}")]
    WriteRejected(String),
}

/// 配置错误（只在程序入口使用，交给 anyhow 处理）
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建请求格式错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }

    /// 创建单条记录处理错误
    pub fn item_failed(
        index: usize,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::ItemProcessing {
            index,
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 存储操作结果类型
pub type StoreResult<T> = Result<T, StoreError>;
