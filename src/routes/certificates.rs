use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::certificates::requests::{CertificateQueryParams, IssueCertificateRequest};
use crate::services::CertificateService;
use crate::utils::SafeCertificateIdI64;

// 懒加载的全局 CertificateService 实例
static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

pub async fn issue_certificate(
    req: HttpRequest,
    issue_data: web::Json<IssueCertificateRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .issue_certificate(issue_data.into_inner(), &req)
        .await
}

pub async fn list_certificates(
    req: HttpRequest,
    query: web::Query<CertificateQueryParams>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .list_certificates(query.into_inner(), &req)
        .await
}

pub async fn get_certificate(
    req: HttpRequest,
    certificate_id: SafeCertificateIdI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .get_certificate(certificate_id.0, &req)
        .await
}

pub async fn download_certificate(
    req: HttpRequest,
    certificate_id: SafeCertificateIdI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .download_certificate(certificate_id.0, &req)
        .await
}

pub async fn verify_certificate(
    req: HttpRequest,
    serial_number: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .verify_certificate(serial_number.as_str(), &req)
        .await
}

// 配置路由：校验公开，其余需要登录
pub fn configure_certificate_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/certificates")
            .route(
                "/verify/{serial_number}",
                web::get().to(verify_certificate),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(issue_certificate))
                    .route("", web::get().to(list_certificates))
                    .route("/{certificate_id}", web::get().to(get_certificate))
                    .route(
                        "/{certificate_id}/download",
                        web::get().to(download_certificate),
                    ),
            ),
    );
}
