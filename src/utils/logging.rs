//! 日志工具模块
//!
//! 提供日志初始化以及批量评分过程中的格式化输出
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅者
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 `debug` 或 `info`。
/// 重复初始化（例如测试中）会被忽略。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(book_id: u32) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 订单接口评分模式");
    info!("📚 测试图书 ID: {}", book_id);
    info!("{}", "=".repeat(60));
}

/// 记录名单加载信息
pub fn log_targets_loaded(total: usize) {
    info!("✓ 找到 {} 个待评分的学生服务", total);
    info!("💡 逐个评分，前一个完成后再开始下一个\n");
}

/// 记录单个目标开始
pub fn log_target_start(index: usize, total: usize, student: &str, host: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始评分第 {}/{} 个: {}", index, total, student);
    info!("🌐 服务地址: {}", host);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(graded: usize, setup_failed: usize, average: f64, scores_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部评分完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已评分: {}", graded);
    info!("❌ 无法获取测试图书: {}", setup_failed);
    info!("📈 平均分: {:.2}", average);
    info!("{}", "=".repeat(60));
    info!("\n成绩已保存至: {}", scores_file);
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
