//! SIMS 班级管理 - 学生信息管理系统后端服务
//!
//! 基于 Actix Web 构建，会话登录后管理班级、课程教师关联与学生分配。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis），承载会话数据
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 会话加载中间件
//! - `models`: 数据模型与页面模型
//! - `routes`: HTTP 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 工作流（班级、登录）
//! - `session`: 会话检查与会话存储
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod session;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_support;
