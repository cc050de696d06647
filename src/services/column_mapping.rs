//! 表头栏位映射 - 业务能力层
//!
//! 只负责"关键栏位在第几栏"，每批只解析一次

use crate::error::{AppError, AppResult};
use crate::models::{CellValue, MatchKey, ScheduleField};

/// 关键栏位的表头别名
///
/// 每个栏位按顺序尝试，第一个在表头中出现的别名生效
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAliases {
    entries: Vec<(ScheduleField, Vec<String>)>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        let entries = ScheduleField::MATCH_KEY
            .into_iter()
            .map(|field| {
                (
                    field,
                    vec![field.local_name().to_string(), field.english_name().to_string()],
                )
            })
            .collect();
        Self { entries }
    }
}

impl ColumnAliases {
    /// 替换某个关键栏位的别名列表
    pub fn with_aliases<I, S>(mut self, field: ScheduleField, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let aliases: Vec<String> = aliases.into_iter().map(Into::into).collect();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) => *existing = aliases,
            None => self.entries.push((field, aliases)),
        }
        self
    }

    pub fn aliases(&self, field: ScheduleField) -> &[String] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, aliases)| aliases.as_slice())
            .unwrap_or_default()
    }

    /// 根据表头解析关键栏位的位置
    ///
    /// 第0栏是有效位置；任何关键栏位找不到都会报错
    pub fn resolve(&self, header: &[CellValue]) -> AppResult<ColumnMap> {
        let position = |field: ScheduleField| -> AppResult<usize> {
            let aliases = self.aliases(field);
            aliases
                .iter()
                .find_map(|alias| header.iter().position(|cell| cell.matches_text(alias)))
                .ok_or_else(|| AppError::ColumnNotFound {
                    field: field.to_string(),
                    aliases: aliases.to_vec(),
                })
        };

        Ok(ColumnMap {
            week: position(ScheduleField::Week)?,
            time: position(ScheduleField::Time)?,
            course: position(ScheduleField::Course)?,
            teacher: position(ScheduleField::Teacher)?,
        })
    }
}

/// 关键栏位在行中的位置（从0开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub week: usize,
    pub time: usize,
    pub course: usize,
    pub teacher: usize,
}

impl ColumnMap {
    /// 该行的关键栏位是否与记录完全相同
    pub fn matches(&self, row: &[CellValue], key: &MatchKey<'_>) -> bool {
        let cell_is = |idx: usize, expected: &str| {
            row.get(idx).is_some_and(|cell| cell.matches_text(expected))
        };

        cell_is(self.week, key.week)
            && cell_is(self.time, key.time)
            && cell_is(self.course, key.course)
            && cell_is(self.teacher, key.teacher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cell::text_row;

    #[test]
    fn first_column_resolves_to_zero() {
        let header = text_row(&["週次", "節次", "時間", "課程", "備註1", "備註2", "老師", "時間戳"]);
        let map = ColumnAliases::default().resolve(&header).unwrap();
        assert_eq!(
            map,
            ColumnMap {
                week: 0,
                time: 2,
                course: 3,
                teacher: 6
            }
        );
    }

    #[test]
    fn english_alias_is_used_when_local_name_is_absent() {
        let header = text_row(&["teacher", "course", "time", "week"]);
        let map = ColumnAliases::default().resolve(&header).unwrap();
        assert_eq!(map.week, 3);
        assert_eq!(map.teacher, 0);
    }

    #[test]
    fn missing_key_column_is_an_error() {
        let header = text_row(&["週次", "時間", "課程"]);
        let err = ColumnAliases::default().resolve(&header).unwrap_err();
        assert!(matches!(err, AppError::ColumnNotFound { ref field, .. } if field == "teacher"));
    }

    #[test]
    fn custom_aliases_replace_defaults() {
        let aliases = ColumnAliases::default().with_aliases(ScheduleField::Teacher, ["講師"]);
        let header = text_row(&["週次", "時間", "課程", "講師"]);
        assert_eq!(aliases.resolve(&header).unwrap().teacher, 3);

        let header = text_row(&["週次", "時間", "課程", "老師"]);
        assert!(aliases.resolve(&header).is_err());
    }

    #[test]
    fn matching_is_exact() {
        let map = ColumnMap {
            week: 0,
            time: 1,
            course: 2,
            teacher: 3,
        };
        let key = MatchKey {
            week: "一",
            time: "09:00",
            course: "數學",
            teacher: "李",
        };
        assert!(map.matches(&text_row(&["一", "09:00", "數學", "李"]), &key));
        assert!(!map.matches(&text_row(&["一", "09:00 ", "數學", "李"]), &key));
        assert!(!map.matches(&text_row(&["一", "09:00", "數學"]), &key));
    }
}
