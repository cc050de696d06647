use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 单元格的值
///
/// 数字和文本序列化时不带标签；时间戳写成 `{"timestamp": "<RFC 3339>"}`，
/// 所以看起来像日期的文本重新读入后仍然是文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    #[serde(with = "timestamp_cell")]
    Timestamp(DateTime<FixedOffset>),
    Text(String),
}

mod timestamp_cell {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct TaggedRef<'a> {
        timestamp: &'a DateTime<FixedOffset>,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Tagged {
        timestamp: DateTime<FixedOffset>,
    }

    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TaggedRef { timestamp: value }.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Tagged::deserialize(deserializer).map(|tagged| tagged.timestamp)
    }
}

/// 工作表中的一行
pub type Row = Vec<CellValue>;

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// 文本内容（非文本单元格返回 None）
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 严格相等：只有内容完全相同的文本单元格才算匹配
    pub fn matches_text(&self, expected: &str) -> bool {
        self.as_text() == Some(expected)
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

/// 从第一栏开始覆盖 `target` 的前 `cells.len()` 个单元格
///
/// 目标行较短时用空白补齐；超出范围的原有单元格保持不变
pub fn overwrite_cells(target: &mut Row, cells: Row) {
    if target.len() < cells.len() {
        target.resize(cells.len(), CellValue::default());
    }
    for (slot, cell) in target.iter_mut().zip(cells) {
        *slot = cell;
    }
}

/// 把字符串切片转换成一行文本单元格
pub fn text_row(values: &[&str]) -> Row {
    values.iter().map(|v| CellValue::text(*v)).collect()
}
