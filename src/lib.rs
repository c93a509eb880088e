//! # Order Validator
//!
//! 一个用于自动评分学生订单接口的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 传输层（Clients）
//! - `clients/` - 持有 HTTP 客户端，只暴露能力
//! - `OrderTransport` - 取图书、提交订单两个能力，测试中可替换
//! - `OrderClient` - 构建请求体并返回 (状态码, 响应体, 请求体)
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `CaseCatalog` - 各字段的非法值 / 合法值 / 有效期用例
//! - `build_payload` - 构建下单请求体
//! - `ReportWriter` - 写评分日志和成绩汇总
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个用例"的评判规则
//! - `GradingCase` / `Category` - 类别 → 期望 → 扣分 对照表
//! - `ScoreState` - 单个目标的评分状态
//! - `CaseFlow` - 提交 → 评判
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_runner` - 批量评分器，逐个处理名单
//! - `orchestrator/target_runner` - 单个目标评分器，按固定顺序执行用例
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{HttpTransport, OrderClient, OrderTransport, RawResponse};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    Book, CaseOutcome, CustomerForm, Field, FormValue, OrderPayload, RunResult, Target,
};
pub use orchestrator::{grade_target, App};
pub use services::CaseCatalog;
pub use workflow::{Points, ScoreState, SUCCESS_MARKER};
