use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CategoryService;
use crate::models::categories::requests::CreateCategoryRequest;
use crate::models::categories::responses::CategoryResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_slug;

pub async fn create_category(
    service: &CategoryService,
    request: &HttpRequest,
    category_data: CreateCategoryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if category_data.name.trim().is_empty() {
        return Ok(
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Category name cannot be empty",
            )),
        );
    }

    if let Err(msg) = validate_slug(&category_data.slug) {
        return Ok(
            HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::CategorySlugInvalid,
                msg,
            )),
        );
    }

    match storage.create_category(category_data).await {
        Ok(category) => {
            info!("Category '{}' created", category.slug);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CategoryResponse { category },
                "Category created successfully",
            )))
        }
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::CategoryAlreadyExists,
                "Category with this slug already exists",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create category: {e}"),
            )),
        ),
    }
}
