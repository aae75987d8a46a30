use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CertificateService;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::certificates::requests::IssueCertificateRequest;
use crate::models::certificates::responses::CertificateResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::random_code::generate_random_code;

pub async fn issue_certificate(
    service: &CertificateService,
    request: &HttpRequest,
    issue_data: IssueCertificateRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let course_id = issue_data.course_id;

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    };

    if !course.certificate_available {
        return Ok(
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::CertificateNotAvailable,
                "This course does not offer a certificate",
            )),
        );
    }

    // 课程必须已完成才能签发
    match storage
        .get_enrollment_by_user_and_course(user.id, course_id)
        .await
    {
        Ok(Some(enrollment)) if enrollment.is_completed() => {}
        Ok(Some(_)) => {
            return Ok(
                HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::CourseNotCompleted,
                    "Course has not been completed yet",
                )),
            );
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                "You are not enrolled in this course",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get enrollment: {e}"),
                )),
            );
        }
    }

    let config = AppConfig::get();
    let serial_number = format!(
        "{}-{}",
        config.certificate.serial_prefix,
        generate_random_code(8)
    );

    match storage
        .issue_certificate(&user, &course, serial_number)
        .await
    {
        Ok((certificate, true)) => {
            info!(
                "Certificate {} issued to user {} for course {}",
                certificate.serial_number, user.id, course_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CertificateResponse { certificate },
                "Certificate issued successfully",
            )))
        }
        // 重复签发是幂等的，返回已有证书
        Ok((certificate, false)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CertificateResponse { certificate },
            "Certificate already issued for this course",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to issue certificate: {e}"),
            )),
        ),
    }
}
