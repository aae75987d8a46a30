pub mod lessons;
pub mod modules;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{
    CreateLessonRequest, CreateModuleRequest, ReorderRequest, UpdateLessonRequest,
    UpdateModuleRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::courses::can_manage_course;
use crate::storage::Storage;

pub struct CourseContentService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseContentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 章节管理
    pub async fn create_module(
        &self,
        course_id: i64,
        module_data: CreateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::create_module(self, request, course_id, module_data).await
    }

    pub async fn list_modules(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::list_modules(self, request, course_id).await
    }

    pub async fn update_module(
        &self,
        course_id: i64,
        module_id: i64,
        update_data: UpdateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::update_module(self, request, course_id, module_id, update_data).await
    }

    pub async fn delete_module(
        &self,
        course_id: i64,
        module_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::delete_module(self, request, course_id, module_id).await
    }

    pub async fn reorder_modules(
        &self,
        course_id: i64,
        reorder_data: ReorderRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::reorder_modules(self, request, course_id, reorder_data).await
    }

    // 课时管理
    pub async fn create_lesson(
        &self,
        course_id: i64,
        module_id: i64,
        lesson_data: CreateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::create_lesson(self, request, course_id, module_id, lesson_data).await
    }

    pub async fn update_lesson(
        &self,
        course_id: i64,
        module_id: i64,
        lesson_id: i64,
        update_data: UpdateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::update_lesson(self, request, course_id, module_id, lesson_id, update_data).await
    }

    pub async fn delete_lesson(
        &self,
        course_id: i64,
        module_id: i64,
        lesson_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::delete_lesson(self, request, course_id, module_id, lesson_id).await
    }

    pub async fn reorder_lessons(
        &self,
        course_id: i64,
        module_id: i64,
        reorder_data: ReorderRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::reorder_lessons(self, request, course_id, module_id, reorder_data).await
    }
}

/// 加载课程并校验管理权限，失败时返回可直接响应的 HttpResponse
pub(crate) async fn load_course_for_manage(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    course_id: i64,
) -> Result<Course, HttpResponse> {
    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    };

    let role = RequireJWT::extract_user_role(request);
    let uid = RequireJWT::extract_user_id(request);
    if !can_manage_course(role.as_ref(), uid, &course) {
        return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "You do not have permission to modify this course",
        )));
    }

    Ok(course)
}
