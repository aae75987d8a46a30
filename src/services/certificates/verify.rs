use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::models::certificates::responses::CertificateVerificationResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 凭证书编号公开校验真伪。查无此证不是错误，
/// 返回 is_valid=false 而不是 404。
pub async fn verify_certificate(
    service: &CertificateService,
    request: &HttpRequest,
    serial_number: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_certificate_by_serial(serial_number).await {
        Ok(Some(certificate)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CertificateVerificationResponse {
                is_valid: true,
                certificate: Some(certificate),
            },
            "Certificate is valid",
        ))),
        Ok(None) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CertificateVerificationResponse {
                is_valid: false,
                certificate: None,
            },
            "Certificate not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to verify certificate: {e}"),
            )),
        ),
    }
}
