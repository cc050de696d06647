/// 行事曆栏位枚举，按一行中的顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleField {
    /// 週次
    Week,
    /// 節次
    Period,
    /// 時間
    Time,
    /// 課程
    Course,
    /// 備註1
    Note1,
    /// 備註2
    Note2,
    /// 老師
    Teacher,
    /// 时间戳（写入时生成）
    Timestamp,
}

impl ScheduleField {
    /// 按行内顺序排列的全部栏位
    pub const ALL: [ScheduleField; 8] = [
        ScheduleField::Week,
        ScheduleField::Period,
        ScheduleField::Time,
        ScheduleField::Course,
        ScheduleField::Note1,
        ScheduleField::Note2,
        ScheduleField::Teacher,
        ScheduleField::Timestamp,
    ];

    /// 用于比对的关键栏位
    pub const MATCH_KEY: [ScheduleField; 4] = [
        ScheduleField::Week,
        ScheduleField::Time,
        ScheduleField::Course,
        ScheduleField::Teacher,
    ];

    /// 工作表表头上使用的名称
    pub fn local_name(self) -> &'static str {
        match self {
            ScheduleField::Week => "週次",
            ScheduleField::Period => "節次",
            ScheduleField::Time => "時間",
            ScheduleField::Course => "課程",
            ScheduleField::Note1 => "備註1",
            ScheduleField::Note2 => "備註2",
            ScheduleField::Teacher => "老師",
            ScheduleField::Timestamp => "時間戳",
        }
    }

    /// 英文别名，同时也是请求里的字段名
    pub fn english_name(self) -> &'static str {
        match self {
            ScheduleField::Week => "week",
            ScheduleField::Period => "period",
            ScheduleField::Time => "time",
            ScheduleField::Course => "course",
            ScheduleField::Note1 => "note1",
            ScheduleField::Note2 => "note2",
            ScheduleField::Teacher => "teacher",
            ScheduleField::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.english_name())
    }
}
