use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程分类
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/category.ts")]
pub struct Category {
    pub id: i64,
    // 展示名称
    pub name: String,
    // URL 友好标识，小写字母数字加连字符
    pub slug: String,
    pub description: Option<String>,
    // 停用的分类不在公开列表中返回，但已有课程不受影响
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
