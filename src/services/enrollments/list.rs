use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::requests::{EnrollmentListQuery, EnrollmentQueryParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    params: EnrollmentQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_uid) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };
    let role = RequireJWT::extract_user_role(request);

    // 管理员可以按任意用户过滤；讲师可以查看自己课程下的全部选课；
    // 其他角色只能看到自己的选课
    let user_id = match role {
        Some(UserRole::Admin) => params.user_id,
        Some(UserRole::Teacher) => match params.course_id {
            Some(course_id) => match storage.get_course_by_id(course_id).await {
                Ok(Some(course)) if course.instructor_id == current_uid => params.user_id,
                Ok(_) => Some(current_uid),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Failed to get course information: {e}"),
                        ),
                    ));
                }
            },
            None => Some(current_uid),
        },
        _ => Some(current_uid),
    };

    let query = EnrollmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        user_id,
        course_id: params.course_id,
        status: params.status,
    };

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Enrollment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve enrollment list: {e}"),
            )),
        ),
    }
}
