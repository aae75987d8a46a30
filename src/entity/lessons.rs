//! 课时实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub lesson_type: String,
    pub content: Option<String>,
    pub duration_minutes: i32,
    pub materials: Option<String>,
    pub position: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_modules::Entity",
        from = "Column::ModuleId",
        to = "super::course_modules::Column::Id"
    )]
    Module,
}

impl Related<super::course_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lesson(self) -> crate::models::courses::entities::Lesson {
        use crate::models::courses::entities::{Lesson, LessonMaterial, LessonType};
        use chrono::{DateTime, Utc};

        Lesson {
            id: self.id,
            module_id: self.module_id,
            title: self.title,
            lesson_type: self
                .lesson_type
                .parse::<LessonType>()
                .unwrap_or(LessonType::Text),
            content: self.content,
            duration_minutes: self.duration_minutes,
            materials: self
                .materials
                .as_deref()
                .and_then(|s| serde_json::from_str::<Vec<LessonMaterial>>(s).ok())
                .unwrap_or_default(),
            position: self.position,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
