use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CourseQueryParams, CreateCourseRequest, CreateLessonRequest, CreateModuleRequest,
    ReorderRequest, UpdateCourseRequest, UpdateLessonRequest, UpdateModuleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{CourseContentService, CourseService};
use crate::utils::{SafeCourseIdI64, SafeLessonIdI64, SafeModuleIdI64};

// 懒加载的全局服务实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static COURSE_CONTENT_SERVICE: Lazy<CourseContentService> =
    Lazy::new(CourseContentService::new_lazy);

// 课程
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

// 章节
pub async fn list_modules(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE.list_modules(course_id.0, &req).await
}

pub async fn create_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_data: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .create_module(course_id.0, module_data.into_inner(), &req)
        .await
}

pub async fn update_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    update_data: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .update_module(course_id.0, module_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .delete_module(course_id.0, module_id.0, &req)
        .await
}

pub async fn reorder_modules(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    reorder_data: web::Json<ReorderRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .reorder_modules(course_id.0, reorder_data.into_inner(), &req)
        .await
}

// 课时
pub async fn create_lesson(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    lesson_data: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .create_lesson(course_id.0, module_id.0, lesson_data.into_inner(), &req)
        .await
}

pub async fn update_lesson(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    lesson_id: SafeLessonIdI64,
    update_data: web::Json<UpdateLessonRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .update_lesson(
            course_id.0,
            module_id.0,
            lesson_id.0,
            update_data.into_inner(),
            &req,
        )
        .await
}

pub async fn delete_lesson(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    lesson_id: SafeLessonIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .delete_lesson(course_id.0, module_id.0, lesson_id.0, &req)
        .await
}

pub async fn reorder_lessons(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    reorder_data: web::Json<ReorderRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_CONTENT_SERVICE
        .reorder_lessons(course_id.0, module_id.0, reorder_data.into_inner(), &req)
        .await
}

// 配置路由：浏览公开（登录后可见自己的草稿），管理仅限讲师/管理员
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::OptionalJWT)
            .route("", web::get().to(list_courses))
            .route("/{course_id}", web::get().to(get_course))
            .route("/{course_id}/modules", web::get().to(list_modules))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("", web::post().to(create_course))
                    .route("/{course_id}", web::put().to(update_course))
                    .route("/{course_id}", web::delete().to(delete_course))
                    .route("/{course_id}/modules", web::post().to(create_module))
                    // reorder 必须先于 {module_id} 注册
                    .route(
                        "/{course_id}/modules/reorder",
                        web::put().to(reorder_modules),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}",
                        web::put().to(update_module),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}",
                        web::delete().to(delete_module),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}/lessons",
                        web::post().to(create_lesson),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}/lessons/reorder",
                        web::put().to(reorder_lessons),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}/lessons/{lesson_id}",
                        web::put().to(update_lesson),
                    )
                    .route(
                        "/{course_id}/modules/{module_id}/lessons/{lesson_id}",
                        web::delete().to(delete_lesson),
                    ),
            ),
    );
}
