use super::SeaOrmStorage;
use crate::entity::courses::Entity as Courses;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::EnrollmentListQuery,
        responses::{EnrollmentListResponse, EnrollmentWithCourse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::{HashMap, HashSet};

impl SeaOrmStorage {
    /// 选课
    ///
    /// (user_id, course_id) 上有唯一索引，并发重复选课时插入失败，
    /// 回读已有记录返回。已退课的记录重新激活而不是新建。
    pub async fn enroll_user_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<(Enrollment, bool)> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            status: Set(EnrollmentStatus::Active.to_string()),
            completed_lessons: Set(Some("[]".to_string())),
            enrolled_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(inserted) => {
                let lesson_ids = self.course_lesson_ids(course_id).await?;
                Ok((inserted.into_enrollment(&lesson_ids), true))
            }
            Err(e) => {
                let err = LmsError::database_operation(format!("选课失败: {e}"));
                if !err.is_unique_violation() {
                    return Err(err);
                }

                // 唯一索引冲突说明已有记录，回读
                let existing = Enrollments::find()
                    .filter(Column::UserId.eq(user_id))
                    .filter(Column::CourseId.eq(course_id))
                    .one(&self.db)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?
                    .ok_or_else(|| {
                        LmsError::database_operation("选课冲突但未找到已有记录".to_string())
                    })?;

                // 已退课的重新激活，视同一次新的选课
                let reactivated = existing.status == EnrollmentStatus::Cancelled.to_string();
                if reactivated {
                    let mut reactivate: ActiveModel = existing.clone().into();
                    reactivate.status = Set(EnrollmentStatus::Active.to_string());
                    reactivate.updated_at = Set(now);
                    reactivate
                        .update(&self.db)
                        .await
                        .map_err(|e| {
                            LmsError::database_operation(format!("重新激活选课失败: {e}"))
                        })?;
                }

                let enrollment = self
                    .get_enrollment_by_id_impl(existing.id)
                    .await?
                    .ok_or_else(|| {
                        LmsError::database_operation("选课记录读取失败".to_string())
                    })?;
                Ok((enrollment, reactivated))
            }
        }
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        match result {
            Some(model) => {
                let lesson_ids = self.course_lesson_ids(model.course_id).await?;
                Ok(Some(model.into_enrollment(&lesson_ids)))
            }
            None => Ok(None),
        }
    }

    /// 获取用户在某课程的选课记录
    pub async fn get_enrollment_by_user_and_course_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        match result {
            Some(model) => {
                let lesson_ids = self.course_lesson_ids(course_id).await?;
                Ok(Some(model.into_enrollment(&lesson_ids)))
            }
            None => Ok(None),
        }
    }

    /// 分页列出选课记录（带课程信息）
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Enrollments::find().find_also_related(Courses);

        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::EnrolledAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课页数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课列表失败: {e}")))?;

        // 批量取讲师名，避免逐条查询
        let instructor_ids: Vec<i64> = rows
            .iter()
            .filter_map(|(_, course)| course.as_ref().map(|c| c.instructor_id))
            .collect();
        let instructors: HashMap<i64, String> = if instructor_ids.is_empty() {
            HashMap::new()
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(instructor_ids))
                .all(&self.db)
                .await
                .map_err(|e| LmsError::database_operation(format!("查询讲师失败: {e}")))?
                .into_iter()
                .map(|u| {
                    let user = u.into_user();
                    (user.id, user.public_name().to_string())
                })
                .collect()
        };

        let mut items = Vec::with_capacity(rows.len());
        for (enrollment, course) in rows {
            let course = match course {
                Some(c) => c,
                // 课程级联删除后不应再有选课记录，跳过残留行
                None => continue,
            };
            let lesson_ids = self.course_lesson_ids(course.id).await?;
            let instructor_name = instructors
                .get(&course.instructor_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string());
            items.push(EnrollmentWithCourse {
                enrollment: enrollment.into_enrollment(&lesson_ids),
                course: course.into_course(instructor_name),
            });
        }

        Ok(EnrollmentListResponse {
            items,
            pagination: PaginationInfo::from_counts(page, size, total, pages),
        })
    }

    /// 标记/撤销课时完成
    ///
    /// 完成列表先与课程现存课时取交集再更新，百分比始终由
    /// 服务端计算。进度到 100% 时状态置为 completed，回落时恢复 active。
    pub async fn update_progress_impl(
        &self,
        enrollment_id: i64,
        lesson_id: i64,
        completed: bool,
    ) -> Result<Option<Enrollment>> {
        let existing = match Enrollments::find_by_id(enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(None),
        };

        let lesson_ids = self.course_lesson_ids(existing.course_id).await?;

        let mut done: HashSet<i64> = existing
            .completed_lesson_ids()
            .into_iter()
            .filter(|id| lesson_ids.contains(id))
            .collect();

        if completed {
            done.insert(lesson_id);
        } else {
            done.remove(&lesson_id);
        }

        let mut done: Vec<i64> = done.into_iter().collect();
        done.sort_unstable();

        let all_done = !lesson_ids.is_empty() && done.len() == lesson_ids.len();
        let new_status = if all_done {
            EnrollmentStatus::Completed
        } else {
            EnrollmentStatus::Active
        };

        let now = chrono::Utc::now().timestamp();

        let mut model: ActiveModel = existing.into();
        model.completed_lessons = Set(Some(serde_json::to_string(&done)?));
        model.status = Set(new_status.to_string());
        model.updated_at = Set(now);
        if completed {
            model.last_accessed_lesson = Set(Some(lesson_id));
            model.last_accessed_at = Set(Some(now));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新学习进度失败: {e}")))?;

        self.get_enrollment_by_id_impl(enrollment_id).await
    }

    /// 退课（保留记录，状态置为 cancelled）
    pub async fn cancel_enrollment_impl(&self, enrollment_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Enrollments::update_many()
            .col_expr(
                Column::Status,
                sea_orm::sea_query::Expr::value(EnrollmentStatus::Cancelled.to_string()),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(enrollment_id))
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("退课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
