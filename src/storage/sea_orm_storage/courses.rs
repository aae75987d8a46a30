use super::SeaOrmStorage;
use crate::entity::course_modules::{Column as ModuleColumn, Entity as CourseModules};
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::lessons::{Column as LessonColumn, Entity as Lessons};
use crate::entity::users::Entity as Users;
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, CourseStatus},
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::{CourseDetailResponse, CourseListResponse, ModuleWithLessons},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

// 讲师被删除后课程会级联删除，正常路径下联查不会落空；
// 防御性兜底，避免 into_course 拿不到名字
const UNKNOWN_INSTRUCTOR: &str = "unknown";

impl SeaOrmStorage {
    /// 创建课程（初始状态为草稿）
    pub async fn create_course_impl(
        &self,
        instructor_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            instructor_id: Set(instructor_id),
            title: Set(req.title),
            short_description: Set(req.short_description),
            description: Set(req.description),
            category: Set(req.category),
            subcategory: Set(req.subcategory),
            price: Set(req.price),
            thumbnail_url: Set(req.thumbnail_url),
            status: Set(CourseStatus::Draft.to_string()),
            level: Set(Some(req.level.to_string())),
            language: Set(req.language),
            tags: Set(Some(serde_json::to_string(&req.tags)?)),
            prerequisites: Set(Some(serde_json::to_string(&req.prerequisites)?)),
            learning_objectives: Set(Some(serde_json::to_string(&req.learning_objectives)?)),
            workload_hours: Set(req.workload_hours),
            certificate_available: Set(req.certificate_available),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建课程失败: {e}")))?;

        let instructor_name = self.instructor_name(instructor_id).await?;
        Ok(result.into_course(instructor_name))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|(course, instructor)| {
            let name = instructor
                .map(|u| u.into_user().public_name().to_string())
                .unwrap_or_else(|| UNKNOWN_INSTRUCTOR.to_string());
            course.into_course(name)
        }))
    }

    /// 获取课程详情：课程 + 按 position 排序的章节与课时
    pub async fn get_course_detail_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<CourseDetailResponse>> {
        let course = match self.get_course_by_id_impl(course_id).await? {
            Some(course) => course,
            None => return Ok(None),
        };

        let modules = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(course_id))
            .order_by_asc(ModuleColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程章节失败: {e}")))?;

        let module_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();

        // 一次取出课程下全部课时，再按章节分组
        let lessons = if module_ids.is_empty() {
            Vec::new()
        } else {
            Lessons::find()
                .filter(LessonColumn::ModuleId.is_in(module_ids))
                .order_by_asc(LessonColumn::Position)
                .all(&self.db)
                .await
                .map_err(|e| LmsError::database_operation(format!("查询课时失败: {e}")))?
        };

        let mut lesson_count: i64 = 0;
        let mut total_duration_minutes: i64 = 0;
        let mut grouped: std::collections::HashMap<i64, Vec<_>> = std::collections::HashMap::new();
        for lesson in lessons {
            lesson_count += 1;
            total_duration_minutes += lesson.duration_minutes as i64;
            grouped.entry(lesson.module_id).or_default().push(lesson);
        }

        let modules = modules
            .into_iter()
            .map(|m| {
                let lessons = grouped
                    .remove(&m.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|l| l.into_lesson())
                    .collect();
                ModuleWithLessons {
                    module: m.into_module(),
                    lessons,
                }
            })
            .collect();

        Ok(Some(CourseDetailResponse {
            course,
            modules,
            lesson_count,
            total_duration_minutes,
        }))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find().find_also_related(Users);

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::ShortDescription.contains(&escaped)),
            );
        }

        // 分类筛选
        if let Some(ref category) = query.category {
            select = select.filter(Column::Category.eq(category));
        }

        // 难度筛选
        if let Some(level) = query.level {
            select = select.filter(Column::Level.eq(level.to_string()));
        }

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 讲师筛选
        if let Some(instructor_id) = query.instructor_id {
            select = select.filter(Column::InstructorId.eq(instructor_id));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses
                .into_iter()
                .map(|(course, instructor)| {
                    let name = instructor
                        .map(|u| u.into_user().public_name().to_string())
                        .unwrap_or_else(|| UNKNOWN_INSTRUCTOR.to_string());
                    course.into_course(name)
                })
                .collect(),
            pagination: PaginationInfo::from_counts(page, size, total, pages),
        })
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = self.get_course_by_id_impl(course_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(short_description) = update.short_description {
            model.short_description = Set(Some(short_description));
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(category) = update.category {
            model.category = Set(Some(category));
        }

        if let Some(subcategory) = update.subcategory {
            model.subcategory = Set(Some(subcategory));
        }

        if let Some(price) = update.price {
            model.price = Set(price);
        }

        if let Some(thumbnail_url) = update.thumbnail_url {
            model.thumbnail_url = Set(Some(thumbnail_url));
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(level) = update.level {
            model.level = Set(Some(level.to_string()));
        }

        if let Some(language) = update.language {
            model.language = Set(Some(language));
        }

        if let Some(tags) = update.tags {
            model.tags = Set(Some(serde_json::to_string(&tags)?));
        }

        if let Some(prerequisites) = update.prerequisites {
            model.prerequisites = Set(Some(serde_json::to_string(&prerequisites)?));
        }

        if let Some(learning_objectives) = update.learning_objectives {
            model.learning_objectives = Set(Some(serde_json::to_string(&learning_objectives)?));
        }

        if let Some(workload_hours) = update.workload_hours {
            model.workload_hours = Set(workload_hours);
        }

        if let Some(certificate_available) = update.certificate_available {
            model.certificate_available = Set(certificate_available);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新课程失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 删除课程（章节、课时、选课、证书随外键级联删除）
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 讲师展示名（display_name 优先，回退用户名）
    pub(crate) async fn instructor_name(&self, instructor_id: i64) -> Result<String> {
        let user = self.get_user_by_id_impl(instructor_id).await?;
        Ok(user
            .map(|u| u.public_name().to_string())
            .unwrap_or_else(|| UNKNOWN_INSTRUCTOR.to_string()))
    }
}
