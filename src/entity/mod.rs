//! 数据库实体定义
//!
//! 实体只负责与数据库的映射，业务层使用 `models` 下的结构，
//! 通过各实体的 `into_*` 方法转换。

pub mod categories;
pub mod certificates;
pub mod course_modules;
pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod prelude;
pub mod users;
