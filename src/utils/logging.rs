//! 日志工具模块
//!
//! 提供批量打印过程中的格式化输出辅助函数

use crate::config::Config;
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量页面打印模式");
    info!("📁 输出目录: {}", config.pdf_dir);
    info!("📄 任务列表: {}", config.pages_file);
    info!("⏱️ 脚本静置延迟: {} ms", config.script_delay_ms);
    info!("{}", "=".repeat(60));
}

/// 记录任务加载信息
///
/// # 参数
/// - `total`: 任务总数
pub fn log_jobs_loaded(total: usize) {
    info!("✓ 找到 {} 个待打印的页面", total);
    info!("💡 将按列表顺序逐个处理，上一个保存完成后才开始下一个\n");
}

/// 打印最终统计信息
///
/// # 参数
/// - `printed`: 成功打印的页面数
/// - `pdf_dir`: 输出目录
pub fn print_final_stats(printed: u32, pdf_dir: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 已打印: {} 个页面", printed);
    info!("{}", "=".repeat(60));
    info!("\nPDF 已保存至: {}", pdf_dir);
}
