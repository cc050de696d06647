use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::cell::{CellValue, Row};
use crate::models::field::ScheduleField;

/// 一条行事曆记录（请求中的单个 item）
///
/// 所有栏位都可能缺省；数字会被转成字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub week: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub note1: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub note2: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub teacher: Option<String>,
}

/// 比对用的关键值 (week, time, course, teacher)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchKey<'a> {
    pub week: &'a str,
    pub time: &'a str,
    pub course: &'a str,
    pub teacher: &'a str,
}

impl ScheduleRecord {
    /// 从请求中的 JSON 值解析
    pub fn from_value(value: &JsonValue) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }

    /// 按栏位取值，空字符串视为缺省
    pub fn field(&self, field: ScheduleField) -> Option<&str> {
        let value = match field {
            ScheduleField::Week => &self.week,
            ScheduleField::Period => &self.period,
            ScheduleField::Time => &self.time,
            ScheduleField::Course => &self.course,
            ScheduleField::Note1 => &self.note1,
            ScheduleField::Note2 => &self.note2,
            ScheduleField::Teacher => &self.teacher,
            ScheduleField::Timestamp => return None,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// 缺少的必填栏位
    pub fn missing_fields(&self) -> Vec<ScheduleField> {
        ScheduleField::MATCH_KEY
            .into_iter()
            .filter(|f| self.field(*f).is_none())
            .collect()
    }

    /// 关键值；任何必填栏位为空时返回 None
    pub fn match_key(&self) -> Option<MatchKey<'_>> {
        Some(MatchKey {
            week: self.field(ScheduleField::Week)?,
            time: self.field(ScheduleField::Time)?,
            course: self.field(ScheduleField::Course)?,
            teacher: self.field(ScheduleField::Teacher)?,
        })
    }

    /// 生成要写入工作表的一行
    ///
    /// 顺序: week, period, time, course, note1, note2, teacher, timestamp
    pub fn to_row(&self, timestamp: DateTime<FixedOffset>) -> Row {
        ScheduleField::ALL
            .into_iter()
            .map(|field| match field {
                ScheduleField::Timestamp => CellValue::Timestamp(timestamp),
                _ => CellValue::text(self.field(field).unwrap_or_default()),
            })
            .collect()
    }

    /// 日志用的简短描述
    pub fn summary(&self) -> String {
        format!(
            "{} - {}",
            self.course.as_deref().unwrap_or_default(),
            self.teacher.as_deref().unwrap_or_default()
        )
    }
}

// 字符串、数字、null 都接受
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}
