use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::{CourseContentService, load_course_for_manage};
use crate::errors::LmsError;
use crate::models::courses::requests::{CreateLessonRequest, ReorderRequest, UpdateLessonRequest};
use crate::models::courses::responses::LessonResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn create_lesson(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
    lesson_data: CreateLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_module_in_course(&storage, course_id, module_id).await {
        return Ok(resp);
    }

    match storage.create_lesson(module_id, lesson_data).await {
        Ok(lesson) => {
            info!("Lesson {} created in module {}", lesson.id, module_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                LessonResponse { lesson },
                "Lesson created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to create lesson: {e}"),
            )),
        ),
    }
}

pub async fn update_lesson(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
    lesson_id: i64,
    update_data: UpdateLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_module_in_course(&storage, course_id, module_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_lesson_in_module(&storage, module_id, lesson_id).await {
        return Ok(resp);
    }

    match storage.update_lesson(lesson_id, update_data).await {
        Ok(Some(lesson)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LessonResponse { lesson },
            "Lesson updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LessonNotFound,
            "Lesson not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update lesson: {e}"),
            )),
        ),
    }
}

pub async fn delete_lesson(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
    lesson_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_module_in_course(&storage, course_id, module_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_lesson_in_module(&storage, module_id, lesson_id).await {
        return Ok(resp);
    }

    match storage.delete_lesson(lesson_id).await {
        Ok(true) => {
            info!("Lesson {} deleted from module {}", lesson_id, module_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Lesson deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LessonNotFound,
            "Lesson not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to delete lesson: {e}"),
            )),
        ),
    }
}

pub async fn reorder_lessons(
    service: &CourseContentService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
    reorder_data: ReorderRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_course_for_manage(&storage, request, course_id).await {
        return Ok(resp);
    }

    if let Err(resp) = check_module_in_course(&storage, course_id, module_id).await {
        return Ok(resp);
    }

    match storage
        .reorder_lessons(module_id, reorder_data.ordered_ids)
        .await
    {
        Ok(lessons) => {
            info!("Lessons of module {} reordered", module_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                lessons,
                "Lessons reordered successfully",
            )))
        }
        Err(LmsError::Validation(_)) => Ok(HttpResponse::UnprocessableEntity().json(
            ApiResponse::error_empty(
                ErrorCode::ReorderMismatch,
                "Ordered ids must match the module's lessons exactly",
            ),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to reorder lessons: {e}"),
            )),
        ),
    }
}

/// 章节必须属于该课程
async fn check_module_in_course(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    module_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) if module.course_id == course_id => Ok(()),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "Module not found in this course",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get module: {e}"),
            )),
        ),
    }
}

/// 课时必须属于该章节
async fn check_lesson_in_module(
    storage: &Arc<dyn Storage>,
    module_id: i64,
    lesson_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_lesson_by_id(lesson_id).await {
        Ok(Some(lesson)) if lesson.module_id == module_id => Ok(()),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LessonNotFound,
            "Lesson not found in this module",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get lesson: {e}"),
            )),
        ),
    }
}
