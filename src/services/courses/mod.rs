pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CourseQueryParams, CreateCourseRequest, UpdateCourseRequest};
use crate::models::users::entities::UserRole;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    // 创建课程
    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, request, course_data).await
    }

    // 获取课程详情
    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, request, course_id).await
    }

    // 课程列表
    pub async fn list_courses(
        &self,
        query: CourseQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, request, course_id, update_data).await
    }

    // 删除课程
    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, request, course_id).await
    }
}

/// 是否有权管理该课程：管理员或课程所属讲师
pub(crate) fn can_manage_course(role: Option<&UserRole>, user_id: Option<i64>, course: &Course) -> bool {
    match role {
        Some(UserRole::Admin) => true,
        Some(UserRole::Teacher) => user_id == Some(course.instructor_id),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::{CourseLevel, CourseStatus};

    fn sample_course(instructor_id: i64) -> Course {
        Course {
            id: 1,
            instructor_id,
            instructor_name: "t".to_string(),
            title: "Rust 入门".to_string(),
            short_description: None,
            description: None,
            category: None,
            subcategory: None,
            price: 0,
            thumbnail_url: None,
            status: CourseStatus::Published,
            level: CourseLevel::Beginner,
            language: None,
            tags: vec![],
            prerequisites: vec![],
            learning_objectives: vec![],
            workload_hours: 10,
            certificate_available: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_can_manage_course() {
        let course = sample_course(7);
        assert!(can_manage_course(Some(&UserRole::Admin), Some(99), &course));
        assert!(can_manage_course(Some(&UserRole::Teacher), Some(7), &course));
        assert!(!can_manage_course(Some(&UserRole::Teacher), Some(8), &course));
        assert!(!can_manage_course(Some(&UserRole::Student), Some(7), &course));
        assert!(!can_manage_course(None, None, &course));
    }
}
