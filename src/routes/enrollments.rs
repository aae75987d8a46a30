use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{
    EnrollRequest, EnrollmentQueryParams, UpdateProgressRequest,
};
use crate::services::EnrollmentService;
use crate::utils::SafeEnrollmentIdI64;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn enroll(
    req: HttpRequest,
    enroll_data: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll(enroll_data.course_id, &req).await
}

pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentQueryParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(query.into_inner(), &req)
        .await
}

pub async fn get_enrollment(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.get_enrollment(enrollment_id.0, &req).await
}

pub async fn update_progress(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
    progress_data: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_progress(enrollment_id.0, progress_data.into_inner(), &req)
        .await
}

pub async fn cancel_enrollment(
    req: HttpRequest,
    enrollment_id: SafeEnrollmentIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .cancel_enrollment(enrollment_id.0, &req)
        .await
}

// 配置路由：选课与进度全部需要登录
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(enroll))
            .route("", web::get().to(list_enrollments))
            .route("/{enrollment_id}", web::get().to(get_enrollment))
            .route(
                "/{enrollment_id}/progress",
                web::put().to(update_progress),
            )
            .route("/{enrollment_id}", web::delete().to(cancel_enrollment)),
    );
}
