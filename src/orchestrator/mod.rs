//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责评分的调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_runner` - 批量评分器
//! - 管理应用生命周期（初始化、运行）
//! - 加载学生名单（Vec<Target>）
//! - 逐个评分，不并发
//! - 写入日志文件与成绩汇总
//! - 输出全局统计信息
//!
//! ### `target_runner` - 单个目标评分器
//! - 获取测试图书
//! - 生成并按类别执行全部用例
//! - 结算分数，生成评分说明
//!
//! ## 层次关系
//!
//! ```text
//! batch_runner (处理 Vec<Target>)
//!     ↓
//! target_runner (处理 Vec<CaseBatch>)
//!     ↓
//! workflow::CaseFlow (处理单个 GradingCase)
//!     ↓
//! services (能力层：catalog / payload / report)
//!     ↓
//! clients (传输：OrderTransport)
//! ```

pub mod batch_runner;
pub mod target_runner;

// 重新导出主要类型
pub use batch_runner::App;
pub use target_runner::{grade_target, plan_cases, CaseBatch};
