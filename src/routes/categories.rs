use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::categories::requests::{
    CategoryQueryParams, CreateCategoryRequest, UpdateCategoryRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CategoryService;
use crate::utils::SafeCategoryIdI64;

// 懒加载的全局 CategoryService 实例
static CATEGORY_SERVICE: Lazy<CategoryService> = Lazy::new(CategoryService::new_lazy);

pub async fn list_categories(
    req: HttpRequest,
    query: web::Query<CategoryQueryParams>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .list_categories(query.into_inner(), &req)
        .await
}

pub async fn get_category(
    req: HttpRequest,
    category_id: SafeCategoryIdI64,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.get_category(category_id.0, &req).await
}

pub async fn create_category(
    req: HttpRequest,
    category_data: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .create_category(category_data.into_inner(), &req)
        .await
}

pub async fn update_category(
    req: HttpRequest,
    category_id: SafeCategoryIdI64,
    update_data: web::Json<UpdateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE
        .update_category(category_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_category(
    req: HttpRequest,
    category_id: SafeCategoryIdI64,
) -> ActixResult<HttpResponse> {
    CATEGORY_SERVICE.delete_category(category_id.0, &req).await
}

// 配置路由：浏览公开，管理仅限管理员
pub fn configure_category_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/categories")
            .wrap(middlewares::OptionalJWT)
            .route("", web::get().to(list_categories))
            .route("/{category_id}", web::get().to(get_category))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_category))
                    .route("/{category_id}", web::put().to(update_category))
                    .route("/{category_id}", web::delete().to(delete_category)),
            ),
    );
}
