use super::entities::{Course, CourseModule, Lesson};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 课程响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseResponse {
    pub course: Course,
}

// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

// 带课时的章节（课程详情页使用）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct ModuleWithLessons {
    #[serde(flatten)]
    #[ts(flatten)]
    pub module: CourseModule,
    pub lessons: Vec<Lesson>,
}

// 课程详情响应：课程 + 按 position 排序的完整大纲
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetailResponse {
    pub course: Course,
    pub modules: Vec<ModuleWithLessons>,
    // 总课时数
    pub lesson_count: i64,
    // 总时长（分钟）
    pub total_duration_minutes: i64,
}

// 章节响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct ModuleResponse {
    pub module: CourseModule,
}

// 课时响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct LessonResponse {
    pub lesson: Lesson,
}
