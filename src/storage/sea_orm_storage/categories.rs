use super::SeaOrmStorage;
use crate::entity::categories::{ActiveModel, Column, Entity as Categories};
use crate::errors::{LmsError, Result};
use crate::models::categories::{
    entities::Category,
    requests::{CreateCategoryRequest, UpdateCategoryRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建分类
    pub async fn create_category_impl(&self, req: CreateCategoryRequest) -> Result<Category> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            slug: Set(req.slug),
            description: Set(req.description),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建分类失败: {e}")))?;

        Ok(result.into_category())
    }

    /// 通过 ID 获取分类
    pub async fn get_category_by_id_impl(&self, id: i64) -> Result<Option<Category>> {
        let result = Categories::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询分类失败: {e}")))?;

        Ok(result.map(|m| m.into_category()))
    }

    /// 通过 slug 获取分类
    pub async fn get_category_by_slug_impl(&self, slug: &str) -> Result<Option<Category>> {
        let result = Categories::find()
            .filter(Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询分类失败: {e}")))?;

        Ok(result.map(|m| m.into_category()))
    }

    /// 列出分类，按名称排序
    pub async fn list_categories_impl(&self, include_inactive: bool) -> Result<Vec<Category>> {
        let mut select = Categories::find();

        if !include_inactive {
            select = select.filter(Column::IsActive.eq(true));
        }

        let categories = select
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询分类列表失败: {e}")))?;

        Ok(categories.into_iter().map(|m| m.into_category()).collect())
    }

    /// 更新分类
    pub async fn update_category_impl(
        &self,
        id: i64,
        update: UpdateCategoryRequest,
    ) -> Result<Option<Category>> {
        let existing = self.get_category_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新分类失败: {e}")))?;

        self.get_category_by_id_impl(id).await
    }

    /// 删除分类
    pub async fn delete_category_impl(&self, id: i64) -> Result<bool> {
        let result = Categories::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除分类失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
