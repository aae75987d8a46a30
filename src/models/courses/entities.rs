use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseStatus {
    Draft,     // 草稿，仅作者与管理员可见
    Published, // 已发布
    Archived,  // 已归档，不再接受新选课
}

impl<'de> Deserialize<'de> for CourseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Draft => write!(f, "draft"),
            CourseStatus::Published => write!(f, "published"),
            CourseStatus::Archived => write!(f, "archived"),
        }
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CourseStatus::Draft),
            "published" => Ok(CourseStatus::Published),
            "archived" => Ok(CourseStatus::Archived),
            _ => Err(format!(
                "无效的课程状态: '{s}'. 支持的状态: draft, published, archived"
            )),
        }
    }
}

// 课程难度
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl<'de> Deserialize<'de> for CourseLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseLevel::Beginner => write!(f, "beginner"),
            CourseLevel::Intermediate => write!(f, "intermediate"),
            CourseLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for CourseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(CourseLevel::Beginner),
            "intermediate" => Ok(CourseLevel::Intermediate),
            "advanced" => Ok(CourseLevel::Advanced),
            _ => Err(format!(
                "无效的课程难度: '{s}'. 支持的难度: beginner, intermediate, advanced"
            )),
        }
    }
}

// 课时类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum LessonType {
    Video,
    Text,
    Quiz,
}

impl<'de> Deserialize<'de> for LessonType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LessonType::Video => write!(f, "video"),
            LessonType::Text => write!(f, "text"),
            LessonType::Quiz => write!(f, "quiz"),
        }
    }
}

impl std::str::FromStr for LessonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(LessonType::Video),
            "text" => Ok(LessonType::Text),
            "quiz" => Ok(LessonType::Quiz),
            _ => Err(format!(
                "无效的课时类型: '{s}'. 支持的类型: video, text, quiz"
            )),
        }
    }
}

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 讲师ID
    pub instructor_id: i64,
    // 讲师展示名（冗余字段，列表页避免联查）
    pub instructor_name: String,
    // 课程标题
    pub title: String,
    // 简介（列表页展示）
    pub short_description: Option<String>,
    // 详细描述
    pub description: Option<String>,
    // 分类 slug
    pub category: Option<String>,
    // 子分类 slug
    pub subcategory: Option<String>,
    // 价格（分为单位，0 表示免费）
    pub price: i64,
    // 封面图地址
    pub thumbnail_url: Option<String>,
    pub status: CourseStatus,
    pub level: CourseLevel,
    // 授课语言
    pub language: Option<String>,
    pub tags: Vec<String>,
    pub prerequisites: Vec<String>,
    pub learning_objectives: Vec<String>,
    // 学时数（证书上标注的工作量）
    pub workload_hours: i32,
    // 完课后是否可领取证书
    pub certificate_available: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

// 课程章节（模块）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseModule {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    // 章节在课程内的序号，从 0 开始连续
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课时附件
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct LessonMaterial {
    pub title: String,
    pub url: String,
}

// 课时
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Lesson {
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub lesson_type: LessonType,
    // video 类型为播放地址，text 类型为正文，quiz 类型为题目JSON
    pub content: Option<String>,
    pub duration_minutes: i32,
    pub materials: Vec<LessonMaterial>,
    // 课时在章节内的序号，从 0 开始连续
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in ["draft", "published", "archived"] {
            let parsed: CourseStatus = status.parse().unwrap();
            assert_eq!(parsed.to_string(), status);
        }
        assert!("closed".parse::<CourseStatus>().is_err());
    }

    #[test]
    fn test_lesson_type_parse() {
        assert_eq!("video".parse::<LessonType>().unwrap(), LessonType::Video);
        assert_eq!("quiz".parse::<LessonType>().unwrap(), LessonType::Quiz);
        assert!("pdf".parse::<LessonType>().is_err());
    }
}
