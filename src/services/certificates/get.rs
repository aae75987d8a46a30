use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::certificates::entities::Certificate;
use crate::models::certificates::responses::CertificateResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn get_certificate(
    service: &CertificateService,
    request: &HttpRequest,
    certificate_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let certificate = match load_owned_certificate(&storage, request, certificate_id).await {
        Ok(certificate) => certificate,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CertificateResponse { certificate },
        "Certificate retrieved successfully",
    )))
}

/// 加载证书并校验归属（本人或管理员），失败时返回可直接响应的 HttpResponse
pub(crate) async fn load_owned_certificate(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    certificate_id: i64,
) -> Result<Certificate, HttpResponse> {
    let Some(current_uid) = RequireJWT::extract_user_id(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    let certificate = match storage.get_certificate_by_id(certificate_id).await {
        Ok(Some(certificate)) => certificate,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CertificateNotFound,
                "Certificate not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get certificate: {e}"),
                )),
            );
        }
    };

    let is_admin = matches!(
        RequireJWT::extract_user_role(request),
        Some(UserRole::Admin)
    );
    if certificate.user_id != current_uid && !is_admin {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You do not have permission to access this certificate",
        )));
    }

    Ok(certificate)
}
