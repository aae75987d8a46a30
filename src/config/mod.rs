//! 配置管理模块

#[path = "impl.rs"]
mod config_impl;
mod structs;

pub use structs::*;
