use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CourseContentService, load_course_for_manage};
use crate::errors::LmsError;
use crate::models::courses::requests::{CreateModuleRequest, ReorderRequest, UpdateModuleRequest};
use crate::models::courses::responses::ModuleResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_module(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    module_data: CreateModuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    match storage.create_module(course_id, module_data).await {
        Ok(module) => {
            info!("Module {} created in course {}", module.id, course_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ModuleResponse { module },
                "Module created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create module: {e}"),
            )),
        ),
    }
}

pub async fn list_modules(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课程存在性检查
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    }

    match storage.list_modules(course_id).await {
        Ok(modules) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            modules,
            "Module list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve module list: {e}"),
            )),
        ),
    }
}

pub async fn update_module(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
    update_data: UpdateModuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    // 章节必须属于该课程
    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) if module.course_id == course_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "Module not found in this course",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get module: {e}"),
                )),
            );
        }
    }

    match storage.update_module(module_id, update_data).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ModuleResponse { module },
            "Module updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "Module not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update module: {e}"),
            )),
        ),
    }
}

pub async fn reorder_modules(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    reorder_data: ReorderRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    match storage
        .reorder_modules(course_id, reorder_data.ordered_ids)
        .await
    {
        Ok(modules) => {
            info!("Modules of course {} reordered", course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                modules,
                "Modules reordered successfully",
            )))
        }
        Err(LmsError::Validation(_)) => Ok(HttpResponse::UnprocessableEntity().json(
            ApiResponse::error_empty(
                ErrorCode::ReorderMismatch,
                "Ordered ids must match the course's modules exactly",
            ),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to reorder modules: {e}"),
            )),
        ),
    }
}

pub async fn delete_module(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) if module.course_id == course_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "Module not found in this course",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get module: {e}"),
                )),
            );
        }
    }

    match storage.delete_module(module_id).await {
        Ok(true) => {
            info!("Module {} deleted from course {}", module_id, course_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Module deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "Module not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete module: {e}"),
            )),
        ),
    }
}
