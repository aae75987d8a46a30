use std::sync::Arc;

use crate::models::{
    categories::{
        entities::Category,
        requests::{CreateCategoryRequest, UpdateCategoryRequest},
    },
    certificates::{
        entities::Certificate, requests::CertificateListQuery,
        responses::CertificateListResponse,
    },
    courses::{
        entities::{Course, CourseModule, Lesson},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateLessonRequest, CreateModuleRequest,
            UpdateCourseRequest, UpdateLessonRequest, UpdateModuleRequest,
        },
        responses::{CourseDetailResponse, CourseListResponse},
    },
    enrollments::{
        entities::Enrollment, requests::EnrollmentListQuery, responses::EnrollmentListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户总数（用于首次启动时初始化管理员）
    async fn count_users(&self) -> Result<u64>;

    /// 分类管理方法
    // 创建分类
    async fn create_category(&self, category: CreateCategoryRequest) -> Result<Category>;
    // 通过ID获取分类
    async fn get_category_by_id(&self, id: i64) -> Result<Option<Category>>;
    // 通过 slug 获取分类
    async fn get_category_by_slug(&self, slug: &str) -> Result<Option<Category>>;
    // 列出分类（include_inactive 为 false 时仅返回启用的分类）
    async fn list_categories(&self, include_inactive: bool) -> Result<Vec<Category>>;
    // 更新分类
    async fn update_category(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>>;
    // 删除分类
    async fn delete_category(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(
        &self,
        instructor_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 获取课程详情（含按 position 排序的完整大纲）
    async fn get_course_detail(&self, course_id: i64) -> Result<Option<CourseDetailResponse>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// 课程大纲管理方法
    // 创建章节（position 缺省追加到末尾）
    async fn create_module(
        &self,
        course_id: i64,
        module: CreateModuleRequest,
    ) -> Result<CourseModule>;
    // 通过ID获取章节
    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<CourseModule>>;
    // 列出课程的章节（按 position 排序）
    async fn list_modules(&self, course_id: i64) -> Result<Vec<CourseModule>>;
    // 更新章节（含重排）
    async fn update_module(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>>;
    // 删除章节（级联删除课时，其后章节 position 前移）
    async fn delete_module(&self, module_id: i64) -> Result<bool>;
    // 按给定 ID 顺序重排课程的全部章节。ID 集合必须与课程当前
    // 章节完全一致，否则返回 Validation 错误。
    async fn reorder_modules(
        &self,
        course_id: i64,
        ordered_ids: Vec<i64>,
    ) -> Result<Vec<CourseModule>>;
    // 创建课时
    async fn create_lesson(&self, module_id: i64, lesson: CreateLessonRequest) -> Result<Lesson>;
    // 通过ID获取课时
    async fn get_lesson_by_id(&self, lesson_id: i64) -> Result<Option<Lesson>>;
    // 列出章节的课时（按 position 排序）
    async fn list_lessons(&self, module_id: i64) -> Result<Vec<Lesson>>;
    // 更新课时（含重排）
    async fn update_lesson(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>>;
    // 删除课时
    async fn delete_lesson(&self, lesson_id: i64) -> Result<bool>;
    // 按给定 ID 顺序重排章节的全部课时，约束同 reorder_modules
    async fn reorder_lessons(&self, module_id: i64, ordered_ids: Vec<i64>) -> Result<Vec<Lesson>>;

    /// 选课与进度方法
    // 选课。返回 (记录, 是否新激活)：唯一索引保证并发下同一用户
    // 同一课程只会产生一条记录；已退课的记录重新激活（计为新激活），
    // 仍在学的记录原样返回（新激活为 false）。
    async fn enroll_user(&self, user_id: i64, course_id: i64) -> Result<(Enrollment, bool)>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>>;
    // 获取用户在某课程的选课记录
    async fn get_enrollment_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>>;
    // 列出选课记录（带课程信息）
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    // 标记/撤销课时完成，返回重新计算进度后的选课记录
    async fn update_progress(
        &self,
        enrollment_id: i64,
        lesson_id: i64,
        completed: bool,
    ) -> Result<Option<Enrollment>>;
    // 退课
    async fn cancel_enrollment(&self, enrollment_id: i64) -> Result<bool>;

    /// 证书管理方法
    // 签发证书。返回 (证书, 是否新签)：唯一索引保证并发签发
    // 只产生一条记录，冲突时返回已有证书。
    async fn issue_certificate(
        &self,
        user: &User,
        course: &Course,
        serial_number: String,
    ) -> Result<(Certificate, bool)>;
    // 通过ID获取证书
    async fn get_certificate_by_id(&self, certificate_id: i64) -> Result<Option<Certificate>>;
    // 通过编号获取证书（公开校验）
    async fn get_certificate_by_serial(&self, serial_number: &str) -> Result<Option<Certificate>>;
    // 获取用户在某课程的证书
    async fn get_certificate_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Certificate>>;
    // 列出证书
    async fn list_certificates_with_pagination(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
