use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{EnrollmentService, get::load_owned_enrollment};
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::enrollments::requests::UpdateProgressRequest;
use crate::models::enrollments::responses::EnrollmentResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_progress(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment_id: i64,
    progress_data: UpdateProgressRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 进度只能由学员本人上报
    let enrollment = match load_owned_enrollment(&storage, request, enrollment_id, false).await {
        Ok(enrollment) => enrollment,
        Err(resp) => return Ok(resp),
    };

    if enrollment.status == EnrollmentStatus::Cancelled {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Enrollment has been cancelled",
        )));
    }

    // 课时必须属于所选课程
    let lesson_module_id = match storage.get_lesson_by_id(progress_data.lesson_id).await {
        Ok(Some(lesson)) => lesson.module_id,
        Ok(None) => {
            return Ok(
                HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::LessonNotInCourse,
                    "Lesson does not belong to this course",
                )),
            );
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get lesson: {e}"),
                )),
            );
        }
    };
    match storage.get_module_by_id(lesson_module_id).await {
        Ok(Some(module)) if module.course_id == enrollment.course_id => {}
        Ok(_) => {
            return Ok(
                HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::LessonNotInCourse,
                    "Lesson does not belong to this course",
                )),
            );
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get module: {e}"),
                )),
            );
        }
    }

    match storage
        .update_progress(enrollment_id, progress_data.lesson_id, progress_data.completed)
        .await
    {
        Ok(Some(enrollment)) => {
            if enrollment.is_completed() {
                info!(
                    "User {} completed course {}",
                    enrollment.user_id, enrollment.course_id
                );
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                EnrollmentResponse { enrollment },
                "Progress updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            "Enrollment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update progress: {e}"),
            )),
        ),
    }
}
