//! 登录演示服务库
//! 凭证库、异步认证、登录状态与 HTTP 接口

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod session;
pub mod telemetry;
