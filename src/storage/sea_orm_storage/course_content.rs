//! 课程大纲存储：章节与课时
//!
//! position 在各自父级范围内从 0 开始连续，插入、移动、删除
//! 都在事务内完成平移，保证不出现空洞或重复。

use super::SeaOrmStorage;
use crate::entity::course_modules::{
    ActiveModel as ModuleActiveModel, Column as ModuleColumn, Entity as CourseModules,
};
use crate::entity::lessons::{
    ActiveModel as LessonActiveModel, Column as LessonColumn, Entity as Lessons,
};
use crate::errors::{LmsError, Result};
use crate::models::courses::{
    entities::{CourseModule, Lesson},
    requests::{CreateLessonRequest, CreateModuleRequest, UpdateLessonRequest, UpdateModuleRequest},
};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建章节
    pub async fn create_module_impl(
        &self,
        course_id: i64,
        req: CreateModuleRequest,
    ) -> Result<CourseModule> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let count = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(course_id))
            .count(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计章节数失败: {e}")))?
            as i32;

        let position = req.position.map(|p| p.clamp(0, count)).unwrap_or(count);

        // 为插入位置腾出空位
        if position < count {
            CourseModules::update_many()
                .col_expr(ModuleColumn::Position, Expr::col(ModuleColumn::Position).add(1))
                .filter(ModuleColumn::CourseId.eq(course_id))
                .filter(ModuleColumn::Position.gte(position))
                .exec(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("调整章节顺序失败: {e}")))?;
        }

        let model = ModuleActiveModel {
            course_id: Set(course_id),
            title: Set(req.title),
            description: Set(req.description),
            position: Set(position),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建章节失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_module())
    }

    /// 通过 ID 获取章节
    pub async fn get_module_by_id_impl(&self, module_id: i64) -> Result<Option<CourseModule>> {
        let result = CourseModules::find_by_id(module_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询章节失败: {e}")))?;

        Ok(result.map(|m| m.into_module()))
    }

    /// 列出课程的章节
    pub async fn list_modules_impl(&self, course_id: i64) -> Result<Vec<CourseModule>> {
        let modules = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(course_id))
            .order_by_asc(ModuleColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询章节列表失败: {e}")))?;

        Ok(modules.into_iter().map(|m| m.into_module()).collect())
    }

    /// 更新章节，position 变化时平移同课程内其余章节
    pub async fn update_module_impl(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>> {
        let existing = match CourseModules::find_by_id(module_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询章节失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model = ModuleActiveModel {
            id: Set(module_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(new_position) = update.position {
            let count = CourseModules::find()
                .filter(ModuleColumn::CourseId.eq(existing.course_id))
                .count(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("统计章节数失败: {e}")))?
                as i32;
            let new_position = new_position.clamp(0, count - 1);
            let old_position = existing.position;

            if new_position > old_position {
                // 下移：(old, new] 区间前移一位
                CourseModules::update_many()
                    .col_expr(
                        ModuleColumn::Position,
                        Expr::col(ModuleColumn::Position).sub(1),
                    )
                    .filter(ModuleColumn::CourseId.eq(existing.course_id))
                    .filter(ModuleColumn::Position.gt(old_position))
                    .filter(ModuleColumn::Position.lte(new_position))
                    .exec(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("调整章节顺序失败: {e}")))?;
            } else if new_position < old_position {
                // 上移：[new, old) 区间后移一位
                CourseModules::update_many()
                    .col_expr(
                        ModuleColumn::Position,
                        Expr::col(ModuleColumn::Position).add(1),
                    )
                    .filter(ModuleColumn::CourseId.eq(existing.course_id))
                    .filter(ModuleColumn::Position.gte(new_position))
                    .filter(ModuleColumn::Position.lt(old_position))
                    .exec(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("调整章节顺序失败: {e}")))?;
            }

            model.position = Set(new_position);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新章节失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_module_by_id_impl(module_id).await
    }

    /// 删除章节，其后章节 position 前移补位
    pub async fn delete_module_impl(&self, module_id: i64) -> Result<bool> {
        let existing = match CourseModules::find_by_id(module_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询章节失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(false),
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let result = CourseModules::delete_by_id(module_id)
            .exec(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除章节失败: {e}")))?;

        CourseModules::update_many()
            .col_expr(
                ModuleColumn::Position,
                Expr::col(ModuleColumn::Position).sub(1),
            )
            .filter(ModuleColumn::CourseId.eq(existing.course_id))
            .filter(ModuleColumn::Position.gt(existing.position))
            .exec(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("调整章节顺序失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按给定顺序整体重排课程章节
    pub async fn reorder_modules_impl(
        &self,
        course_id: i64,
        ordered_ids: Vec<i64>,
    ) -> Result<Vec<CourseModule>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let current: std::collections::HashSet<i64> = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(course_id))
            .all(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询章节列表失败: {e}")))?
            .into_iter()
            .map(|m| m.id)
            .collect();

        let requested: std::collections::HashSet<i64> = ordered_ids.iter().copied().collect();
        if requested.len() != ordered_ids.len() || requested != current {
            return Err(LmsError::validation("重排 ID 集合与课程现有章节不一致"));
        }

        for (position, module_id) in ordered_ids.iter().enumerate() {
            CourseModules::update_many()
                .col_expr(ModuleColumn::Position, Expr::value(position as i32))
                .col_expr(ModuleColumn::UpdatedAt, Expr::value(now))
                .filter(ModuleColumn::Id.eq(*module_id))
                .exec(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("调整章节顺序失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        self.list_modules_impl(course_id).await
    }

    /// 创建课时
    pub async fn create_lesson_impl(
        &self,
        module_id: i64,
        req: CreateLessonRequest,
    ) -> Result<Lesson> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let count = Lessons::find()
            .filter(LessonColumn::ModuleId.eq(module_id))
            .count(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计课时数失败: {e}")))?
            as i32;

        let position = req.position.map(|p| p.clamp(0, count)).unwrap_or(count);

        if position < count {
            Lessons::update_many()
                .col_expr(LessonColumn::Position, Expr::col(LessonColumn::Position).add(1))
                .filter(LessonColumn::ModuleId.eq(module_id))
                .filter(LessonColumn::Position.gte(position))
                .exec(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("调整课时顺序失败: {e}")))?;
        }

        let model = LessonActiveModel {
            module_id: Set(module_id),
            title: Set(req.title),
            lesson_type: Set(req.lesson_type.to_string()),
            content: Set(req.content),
            duration_minutes: Set(req.duration_minutes),
            materials: Set(Some(serde_json::to_string(&req.materials)?)),
            position: Set(position),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建课时失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// 通过 ID 获取课时
    pub async fn get_lesson_by_id_impl(&self, lesson_id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课时失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    /// 列出章节的课时
    pub async fn list_lessons_impl(&self, module_id: i64) -> Result<Vec<Lesson>> {
        let lessons = Lessons::find()
            .filter(LessonColumn::ModuleId.eq(module_id))
            .order_by_asc(LessonColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课时列表失败: {e}")))?;

        Ok(lessons.into_iter().map(|m| m.into_lesson()).collect())
    }

    /// 更新课时，position 变化时平移同章节内其余课时
    pub async fn update_lesson_impl(
        &self,
        lesson_id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let existing = match Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课时失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(None),
        };

        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model = LessonActiveModel {
            id: Set(lesson_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(lesson_type) = update.lesson_type {
            model.lesson_type = Set(lesson_type.to_string());
        }

        if let Some(content) = update.content {
            model.content = Set(Some(content));
        }

        if let Some(duration_minutes) = update.duration_minutes {
            model.duration_minutes = Set(duration_minutes);
        }

        if let Some(materials) = update.materials {
            model.materials = Set(Some(serde_json::to_string(&materials)?));
        }

        if let Some(new_position) = update.position {
            let count = Lessons::find()
                .filter(LessonColumn::ModuleId.eq(existing.module_id))
                .count(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("统计课时数失败: {e}")))?
                as i32;
            let new_position = new_position.clamp(0, count - 1);
            let old_position = existing.position;

            if new_position > old_position {
                Lessons::update_many()
                    .col_expr(
                        LessonColumn::Position,
                        Expr::col(LessonColumn::Position).sub(1),
                    )
                    .filter(LessonColumn::ModuleId.eq(existing.module_id))
                    .filter(LessonColumn::Position.gt(old_position))
                    .filter(LessonColumn::Position.lte(new_position))
                    .exec(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("调整课时顺序失败: {e}")))?;
            } else if new_position < old_position {
                Lessons::update_many()
                    .col_expr(
                        LessonColumn::Position,
                        Expr::col(LessonColumn::Position).add(1),
                    )
                    .filter(LessonColumn::ModuleId.eq(existing.module_id))
                    .filter(LessonColumn::Position.gte(new_position))
                    .filter(LessonColumn::Position.lt(old_position))
                    .exec(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("调整课时顺序失败: {e}")))?;
            }

            model.position = Set(new_position);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新课时失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_lesson_by_id_impl(lesson_id).await
    }

    /// 删除课时，其后课时 position 前移补位
    pub async fn delete_lesson_impl(&self, lesson_id: i64) -> Result<bool> {
        let existing = match Lessons::find_by_id(lesson_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课时失败: {e}")))?
        {
            Some(m) => m,
            None => return Ok(false),
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let result = Lessons::delete_by_id(lesson_id)
            .exec(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除课时失败: {e}")))?;

        Lessons::update_many()
            .col_expr(
                LessonColumn::Position,
                Expr::col(LessonColumn::Position).sub(1),
            )
            .filter(LessonColumn::ModuleId.eq(existing.module_id))
            .filter(LessonColumn::Position.gt(existing.position))
            .exec(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("调整课时顺序失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按给定顺序整体重排章节课时
    pub async fn reorder_lessons_impl(
        &self,
        module_id: i64,
        ordered_ids: Vec<i64>,
    ) -> Result<Vec<Lesson>> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let current: std::collections::HashSet<i64> = Lessons::find()
            .filter(LessonColumn::ModuleId.eq(module_id))
            .all(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课时列表失败: {e}")))?
            .into_iter()
            .map(|l| l.id)
            .collect();

        let requested: std::collections::HashSet<i64> = ordered_ids.iter().copied().collect();
        if requested.len() != ordered_ids.len() || requested != current {
            return Err(LmsError::validation("重排 ID 集合与章节现有课时不一致"));
        }

        for (position, lesson_id) in ordered_ids.iter().enumerate() {
            Lessons::update_many()
                .col_expr(LessonColumn::Position, Expr::value(position as i32))
                .col_expr(LessonColumn::UpdatedAt, Expr::value(now))
                .filter(LessonColumn::Id.eq(*lesson_id))
                .exec(&txn)
                .await
                .map_err(|e| LmsError::database_operation(format!("调整课时顺序失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        self.list_lessons_impl(module_id).await
    }

    /// 课程当前存在的全部课时 ID（进度计算用）
    pub(crate) async fn course_lesson_ids(
        &self,
        course_id: i64,
    ) -> Result<std::collections::HashSet<i64>> {
        let module_ids: Vec<i64> = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询章节列表失败: {e}")))?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if module_ids.is_empty() {
            return Ok(std::collections::HashSet::new());
        }

        let lessons = Lessons::find()
            .filter(LessonColumn::ModuleId.is_in(module_ids))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课时列表失败: {e}")))?;

        Ok(lessons.into_iter().map(|l| l.id).collect())
    }
}
