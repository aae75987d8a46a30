use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::certificates::requests::{CertificateListQuery, CertificateQueryParams};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_certificates(
    service: &CertificateService,
    request: &HttpRequest,
    params: CertificateQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_uid) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Authentication required",
        )));
    };

    // 管理员可以看到全部证书，其他角色只能看到自己的
    let user_id = match RequireJWT::extract_user_role(request) {
        Some(UserRole::Admin) => None,
        _ => Some(current_uid),
    };

    let query = CertificateListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        user_id,
        course_id: params.course_id,
    };

    match storage.list_certificates_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Certificate list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve certificate list: {e}"),
            )),
        ),
    }
}
