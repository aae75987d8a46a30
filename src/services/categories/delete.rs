use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CategoryService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_category(category_id).await {
        Ok(true) => {
            info!("Category {} deleted", category_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Category deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "Category not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete category: {e}"),
            )),
        ),
    }
}
