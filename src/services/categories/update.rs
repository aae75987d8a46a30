use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CategoryService;
use crate::models::categories::requests::UpdateCategoryRequest;
use crate::models::categories::responses::CategoryResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_id: i64,
    update_data: UpdateCategoryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(name) = &update_data.name {
        if name.trim().is_empty() {
            return Ok(
                HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Category name cannot be empty",
                )),
            );
        }
    }

    match storage.update_category(category_id, update_data).await {
        Ok(Some(category)) => {
            info!("Category {} updated", category_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CategoryResponse { category },
                "Category updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CategoryNotFound,
            "Category not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update category: {e}"),
            )),
        ),
    }
}
