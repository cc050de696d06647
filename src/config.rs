use crate::error::ConfigError;
use crate::models::ProcessMode;
use crate::services::ColumnAliases;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 目标工作表名称
    pub sheet_name: String,
    /// 工作簿文件（.json 或 .toml）
    pub workbook_path: String,
    /// 批量请求文件
    pub batch_file: String,
    /// 请求未指定 action 时使用的模式
    pub default_mode: ProcessMode,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 关键栏位的表头别名
    pub column_aliases: ColumnAliases,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: "行事曆".to_string(),
            workbook_path: "workbook.json".to_string(),
            batch_file: "batch.json".to_string(),
            default_mode: ProcessMode::MatchAndUpdate,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            column_aliases: ColumnAliases::default(),
        }
    }
}

impl Config {
    /// 读取环境变量，未设置的项使用默认值
    ///
    /// 设置了但无法解析的值会报错，而不是悄悄回退
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 同 `from_env`，变量值由 `lookup` 提供
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            sheet_name: lookup("SHEET_NAME").unwrap_or(default.sheet_name),
            workbook_path: lookup("WORKBOOK_PATH").unwrap_or(default.workbook_path),
            batch_file: lookup("BATCH_FILE").unwrap_or(default.batch_file),
            default_mode: match lookup("PROCESS_MODE") {
                Some(value) => ProcessMode::from_str(&value).ok_or_else(|| {
                    ConfigError::EnvVarParseFailed {
                        var_name: "PROCESS_MODE".to_string(),
                        value,
                        expected_type: "simple | advanced".to_string(),
                    }
                })?,
                None => default.default_mode,
            },
            verbose_logging: match lookup("VERBOSE_LOGGING") {
                Some(value) => value.parse::<bool>().map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "VERBOSE_LOGGING".to_string(),
                    value,
                    expected_type: "bool".to_string(),
                })?,
                None => default.verbose_logging,
            },
            output_log_file: lookup("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            column_aliases: default.column_aliases,
        })
    }
}
