use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::courses::responses::CourseResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let role = RequireJWT::extract_user_role(request);
    let storage = service.get_storage(request);

    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 权限校验并确定课程归属讲师
    let instructor_id =
        match resolve_instructor_id(role, uid, course_data.instructor_id, &storage).await {
            Ok(id) => id,
            Err(resp) => return Ok(resp),
        };

    // 创建课程（初始为草稿状态）
    match storage.create_course(instructor_id, course_data).await {
        Ok(course) => {
            info!("Course {} created successfully by {}", course.title, uid);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CourseResponse { course },
                "Course created successfully",
            )))
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreationFailed,
                    format!("Course creation failed: {e}"),
                )),
            )
        }
    }
}

/// 权限校验辅助函数
///
/// - 讲师：instructor_id 缺省取自己，指定则必须是自己
/// - 管理员：必须指定 instructor_id，且目标用户必须是讲师角色
async fn resolve_instructor_id(
    role: Option<UserRole>,
    uid: i64,
    requested: Option<i64>,
    storage: &Arc<dyn Storage>,
) -> Result<i64, HttpResponse> {
    match role {
        Some(UserRole::Admin) => {
            let instructor_id = match requested {
                Some(id) => id,
                None => {
                    return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        "Admin must specify an instructor_id",
                    )));
                }
            };
            match storage.get_user_by_id(instructor_id).await {
                Ok(Some(user)) => {
                    if user.role != UserRole::Teacher {
                        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::CoursePermissionDenied,
                            "Admin can only create courses for teachers",
                        )));
                    }
                    Ok(instructor_id)
                }
                Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    "User not found",
                ))),
                Err(e) => {
                    error!("Failed to get user by id: {}", e);
                    Err(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Internal server error while fetching user",
                        )),
                    )
                }
            }
        }
        Some(UserRole::Teacher) => {
            if let Some(id) = requested
                && id != uid
            {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::CoursePermissionDenied,
                    "You do not have permission to create a course for another instructor",
                )));
            }
            Ok(uid)
        }
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "You do not have permission to create a course",
        ))),
    }
}
