//! 批量评分器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量目标的评分和结果落盘。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：读取配置、加载学生名单
//! 2. **逐个评分**：前一个目标的全部用例完成后才开始下一个，互不交错
//! 3. **结果落盘**：每个学生一个日志文件，外加一份成绩汇总
//! 4. **全局统计**：汇总所有目标的评分结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个用例的细节
//! - **状态隔离**：每个目标各自持有评分状态
//! - **向下委托**：委托 target_runner 处理单个目标

use crate::clients::OrderClient;
use crate::config::Config;
use crate::models::{load_roster, RunResult, Target};
use crate::orchestrator::target_runner;
use crate::services::ReportWriter;
use crate::utils::logging;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    targets: Vec<Target>,
    writer: ReportWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(config.book_id);

        let targets = match config.single_target() {
            Some((name, host)) => {
                info!("🎯 单目标模式: {} - {}", name, host);
                vec![Target::new(name, host)]
            }
            None => {
                info!("\n📁 正在加载学生名单: {}", config.targets_file);
                load_roster(Path::new(&config.targets_file))
                    .await
                    .with_context(|| format!("无法加载学生名单: {}", config.targets_file))?
            }
        };

        let writer = ReportWriter::new(&config.results_dir);

        Ok(Self {
            config,
            targets,
            writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<Vec<RunResult>> {
        let total = self.targets.len();
        logging::log_targets_loaded(total);

        let today = chrono::Local::now().date_naive();
        let mut results = Vec::with_capacity(total);

        for (index, target) in self.targets.iter().enumerate() {
            logging::log_target_start(index + 1, total, &target.student_name, &target.host_url);

            let client = OrderClient::for_host(&target.host_url);
            let result =
                target_runner::grade_target(&client, target, self.config.book_id, today).await;

            match self.writer.write_log(&result).await {
                Ok(path) => info!("[{}] 📝 日志已写入: {}", target.student_name, path.display()),
                Err(e) => warn!("[{}] ⚠️ 日志写入失败: {}", target.student_name, e),
            }

            results.push(result);
        }

        self.writer
            .write_scores(Path::new(&self.config.scores_file), &results)
            .await
            .with_context(|| format!("无法写入成绩汇总: {}", self.config.scores_file))?;

        print_final_stats(&results, &self.config);

        Ok(results)
    }
}

// ========== 日志辅助函数 ==========

fn print_final_stats(results: &[RunResult], config: &Config) {
    let setup_failed = results.iter().filter(|r| r.setup_failed()).count();
    let average = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| f64::from(r.score)).sum::<f64>() / results.len() as f64
    };

    logging::print_final_stats(
        results.len() - setup_failed,
        setup_failed,
        average,
        &config.scores_file,
    );
}
