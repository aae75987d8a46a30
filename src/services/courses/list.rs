use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::entities::CourseStatus;
use crate::models::courses::requests::{CourseListQuery, CourseQueryParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_courses(
    service: &CourseService,
    query: CourseQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let role = RequireJWT::extract_user_role(request);
    let uid = RequireJWT::extract_user_id(request);

    // 非管理员的状态筛选受限：
    // - 讲师查询自己的课程时可任意筛选状态
    // - 其余情况一律强制只返回已发布课程
    let status = match role {
        Some(UserRole::Admin) => query.status,
        Some(UserRole::Teacher) if query.instructor_id.is_some() && query.instructor_id == uid => {
            query.status
        }
        _ => Some(CourseStatus::Published),
    };

    let list_query = CourseListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        category: query.category,
        level: query.level,
        status,
        instructor_id: query.instructor_id,
        search: query.search,
    };

    match storage.list_courses_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Course list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course list: {e}"),
            )),
        ),
    }
}
