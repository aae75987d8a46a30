use super::entities::{CourseLevel, CourseStatus, LessonMaterial, LessonType};
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
    pub instructor_id: Option<i64>,
    pub search: Option<String>,
}

// 创建课程请求
//
// # instructor_id 字段说明
// - **讲师创建**：可选字段，不填写则自动使用当前登录讲师的 ID
// - **管理员创建**：必填字段，用于指定课程归属的讲师
//
// # 权限验证
// - 讲师：如果指定 instructor_id，必须等于自己的 ID
// - 管理员：必须指定 instructor_id，且该用户必须是讲师角色
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub instructor_id: Option<i64>,
    pub title: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub price: i64,
    pub thumbnail_url: Option<String>,
    pub level: CourseLevel,
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub workload_hours: i32,
    #[serde(default)]
    pub certificate_available: bool,
}

// 更新课程请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub status: Option<CourseStatus>,
    pub level: Option<CourseLevel>,
    pub language: Option<String>,
    pub tags: Option<Vec<String>>,
    pub prerequisites: Option<Vec<String>>,
    pub learning_objectives: Option<Vec<String>>,
    pub workload_hours: Option<i32>,
    pub certificate_available: Option<bool>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<String>,
    pub level: Option<CourseLevel>,
    pub status: Option<CourseStatus>,
    pub instructor_id: Option<i64>,
    pub search: Option<String>,
}

// 创建章节请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateModuleRequest {
    pub title: String,
    pub description: Option<String>,
    /// 插入位置，缺省追加到末尾
    pub position: Option<i32>,
}

// 更新章节请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateModuleRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<i32>,
}

// 重排请求：父级下全部子项 ID 的新顺序
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct ReorderRequest {
    pub ordered_ids: Vec<i64>,
}

// 创建课时请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateLessonRequest {
    pub title: String,
    pub lesson_type: LessonType,
    pub content: Option<String>,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub materials: Vec<LessonMaterial>,
    /// 插入位置，缺省追加到末尾
    pub position: Option<i32>,
}

// 更新课时请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateLessonRequest {
    pub title: Option<String>,
    pub lesson_type: Option<LessonType>,
    pub content: Option<String>,
    pub duration_minutes: Option<i32>,
    pub materials: Option<Vec<LessonMaterial>>,
    pub position: Option<i32>,
}
