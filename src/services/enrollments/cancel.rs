use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EnrollmentService, get::load_owned_enrollment};
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn cancel_enrollment(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match load_owned_enrollment(&storage, request, enrollment_id, true).await {
        Ok(enrollment) => enrollment,
        Err(resp) => return Ok(resp),
    };

    // 重复退课是幂等的
    if enrollment.status == EnrollmentStatus::Cancelled {
        return Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Enrollment already cancelled")));
    }

    match storage.cancel_enrollment(enrollment_id).await {
        Ok(true) => {
            info!(
                "User {} cancelled enrollment in course {}",
                enrollment.user_id, enrollment.course_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Enrollment cancelled successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to cancel enrollment: {e}"),
            )),
        ),
    }
}
