//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub instructor_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: i64,
    pub thumbnail_url: Option<String>,
    pub status: String,
    pub level: Option<String>,
    pub language: Option<String>,
    pub tags: Option<String>,
    pub prerequisites: Option<String>,
    pub learning_objectives: Option<String>,
    pub workload_hours: i32,
    pub certificate_available: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::InstructorId",
        to = "super::users::Column::Id"
    )]
    Instructor,
    #[sea_orm(has_many = "super::course_modules::Entity")]
    Modules,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::certificates::Entity")]
    Certificates,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::course_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Modules.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    /// 讲师名不落库，由调用方联查 users 表后传入
    pub fn into_course(self, instructor_name: String) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::{Course, CourseLevel, CourseStatus};
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            instructor_id: self.instructor_id,
            instructor_name,
            title: self.title,
            short_description: self.short_description,
            description: self.description,
            category: self.category,
            subcategory: self.subcategory,
            price: self.price,
            thumbnail_url: self.thumbnail_url,
            status: self
                .status
                .parse::<CourseStatus>()
                .unwrap_or(CourseStatus::Draft),
            level: self
                .level
                .as_deref()
                .and_then(|s| s.parse::<CourseLevel>().ok())
                .unwrap_or(CourseLevel::Beginner),
            language: self.language,
            tags: parse_string_list(self.tags.as_deref()),
            prerequisites: parse_string_list(self.prerequisites.as_deref()),
            learning_objectives: parse_string_list(self.learning_objectives.as_deref()),
            workload_hours: self.workload_hours,
            certificate_available: self.certificate_available,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

// 字符串列表以 JSON 数组形式落库，解析失败视为空列表
pub(crate) fn parse_string_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_list() {
        assert_eq!(
            parse_string_list(Some(r#"["rust","web"]"#)),
            vec!["rust".to_string(), "web".to_string()]
        );
        assert!(parse_string_list(None).is_empty());
        assert!(parse_string_list(Some("not json")).is_empty());
    }
}
