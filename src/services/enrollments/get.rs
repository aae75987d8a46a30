use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::entities::Enrollment;
use crate::models::enrollments::responses::EnrollmentResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn get_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match load_owned_enrollment(&storage, request, enrollment_id, true).await {
        Ok(enrollment) => enrollment,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        EnrollmentResponse { enrollment },
        "Enrollment retrieved successfully",
    )))
}

/// 加载选课记录并校验归属，失败时返回可直接响应的 HttpResponse。
/// allow_admin 为 true 时管理员也可访问他人的记录。
pub(crate) async fn load_owned_enrollment(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    enrollment_id: i64,
    allow_admin: bool,
) -> Result<Enrollment, HttpResponse> {
    let Some(current_uid) = RequireJWT::extract_user_id(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let enrollment = match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "Enrollment not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get enrollment: {e}"),
                )),
            );
        }
    };

    let is_admin = matches!(
        RequireJWT::extract_user_role(request),
        Some(UserRole::Admin)
    );
    if enrollment.user_id != current_uid && !(allow_admin && is_admin) {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You do not have permission to access this enrollment",
        )));
    }

    Ok(enrollment)
}
