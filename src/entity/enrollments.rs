//! 选课记录实体

use sea_orm::entity::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub status: String,
    pub completed_lessons: Option<String>,
    pub last_accessed_lesson: Option<i64>,
    pub last_accessed_at: Option<i64>,
    pub enrolled_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 解析已完成课时ID列表（未过滤，含可能已删除的课时）
    pub fn completed_lesson_ids(&self) -> Vec<i64> {
        self.completed_lessons
            .as_deref()
            .and_then(|s| serde_json::from_str::<Vec<i64>>(s).ok())
            .unwrap_or_default()
    }

    /// 转换为业务模型
    ///
    /// `course_lesson_ids` 为课程当前存在的全部课时ID，
    /// 进度按交集计算，避免信任历史残留数据。
    pub fn into_enrollment(
        self,
        course_lesson_ids: &HashSet<i64>,
    ) -> crate::models::enrollments::entities::Enrollment {
        use crate::models::enrollments::entities::{Enrollment, EnrollmentStatus};
        use chrono::{DateTime, Utc};

        let completed: Vec<i64> = self
            .completed_lesson_ids()
            .into_iter()
            .filter(|id| course_lesson_ids.contains(id))
            .collect();
        let progress_percent = compute_progress(completed.len(), course_lesson_ids.len());

        Enrollment {
            id: self.id,
            user_id: self.user_id,
            course_id: self.course_id,
            status: self
                .status
                .parse::<EnrollmentStatus>()
                .unwrap_or(EnrollmentStatus::Active),
            completed_lessons: completed,
            progress_percent,
            last_accessed_lesson: self.last_accessed_lesson,
            last_accessed_at: self
                .last_accessed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            enrolled_at: DateTime::<Utc>::from_timestamp(self.enrolled_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

/// 进度百分比：完成数 / 总数，四舍五入；课程没有课时时恒为 0
pub fn compute_progress(completed: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    ((completed * 100 + total / 2) / total) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_progress() {
        assert_eq!(compute_progress(0, 0), 0);
        assert_eq!(compute_progress(0, 10), 0);
        assert_eq!(compute_progress(3, 3), 100);
    }

    #[test]
    fn test_compute_progress_rounds_half_up() {
        // 1/3 = 33.3% -> 33，2/3 = 66.7% -> 67
        assert_eq!(compute_progress(1, 3), 33);
        assert_eq!(compute_progress(2, 3), 67);
        assert_eq!(compute_progress(1, 8), 13);
        assert_eq!(compute_progress(1, 200), 1);
    }

    #[test]
    fn test_progress_ignores_deleted_lessons() {
        let model = Model {
            id: 1,
            user_id: 1,
            course_id: 1,
            status: "active".to_string(),
            // 课时 99 已被删除
            completed_lessons: Some("[1,2,99]".to_string()),
            last_accessed_lesson: None,
            last_accessed_at: None,
            enrolled_at: 0,
            updated_at: 0,
        };
        let existing: HashSet<i64> = [1, 2, 3, 4].into_iter().collect();
        let enrollment = model.into_enrollment(&existing);
        assert_eq!(enrollment.completed_lessons, vec![1, 2]);
        assert_eq!(enrollment.progress_percent, 50);
    }
}
