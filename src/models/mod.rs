pub mod auth;
pub mod categories;
pub mod certificates;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 应用错误码
///
/// 与 HTTP 状态码配合使用：前两位大致对应 HTTP 状态，
/// 后三位区分具体业务场景。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 40000,
    Unauthorized = 40100,
    AuthFailed = 40101,
    Forbidden = 40300,
    NotFound = 40400,
    InternalServerError = 50000,

    // 用户
    CanNotDeleteCurrentUser = 40001,
    UserNotFound = 40410,
    UserNameAlreadyExists = 40910,
    UserEmailAlreadyExists = 40911,
    UserAlreadyExists = 40912,
    UserNameInvalid = 42210,
    UserEmailInvalid = 42211,
    PasswordInvalid = 42212,
    RegisterFailed = 50010,
    UserUpdateFailed = 50011,
    UserCreationFailed = 50012,
    UserDeleteFailed = 50013,

    // 课程
    CourseNotFound = 40420,
    CoursePermissionDenied = 40320,
    CourseCreationFailed = 50020,
    ModuleNotFound = 40421,
    LessonNotFound = 40422,
    ReorderMismatch = 42220,

    // 选课与进度
    EnrollmentNotFound = 40430,
    AlreadyEnrolled = 40930,
    CourseNotPublished = 42230,
    LessonNotInCourse = 42231,

    // 证书
    CertificateNotFound = 40440,
    CourseNotCompleted = 42240,
    CertificateNotAvailable = 42241,

    // 分类
    CategoryNotFound = 40450,
    CategoryAlreadyExists = 40950,
    CategorySlugInvalid = 42250,
}

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
