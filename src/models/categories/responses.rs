use super::entities::Category;
use serde::Serialize;
use ts_rs::TS;

// 分类响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryResponse {
    pub category: Category,
}

// 分类列表响应（数量少，不分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct CategoryListResponse {
    pub items: Vec<Category>,
}
