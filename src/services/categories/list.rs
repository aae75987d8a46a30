use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CategoryService;
use crate::middlewares::RequireJWT;
use crate::models::categories::requests::CategoryQueryParams;
use crate::models::categories::responses::CategoryListResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_categories(
    service: &CategoryService,
    request: &HttpRequest,
    params: CategoryQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 停用分类只对管理员可见
    let is_admin = matches!(
        RequireJWT::extract_user_role(request),
        Some(UserRole::Admin)
    );
    let include_inactive = params.include_inactive && is_admin;

    match storage.list_categories(include_inactive).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CategoryListResponse { items },
            "Category list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve category list: {e}"),
            )),
        ),
    }
}
