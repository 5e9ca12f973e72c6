use anyhow::Result;
/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fs;
use tracing::info;

use crate::models::loaders::corpus_loader::CorpusStats;
use crate::orchestrator::batch_processor::RunStats;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
///
/// # 返回
/// 返回是否成功初始化
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n测验生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(source_dir: &str, output_dir: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 语料批量测验生成模式");
    info!("📁 语料目录: {}", source_dir);
    info!("📂 输出目录: {}", output_dir);
    info!("{}", "=".repeat(60));
}

/// 记录语料加载信息
pub fn log_corpus_loaded(stats: &CorpusStats, window_size: usize, group_size: usize) {
    info!("✓ 共加载 {} 个文件、{} 条题目记录", stats.files, stats.records);
    info!("📋 将以每 {} 条为一个窗口、每 {} 条为一组生成测验", window_size, group_size);
    for (file_identifier, count) in &stats.per_file {
        info!("  - {}: {} 条", file_identifier, count);
    }
    if stats.malformed + stats.missing_answer > 0 {
        info!(
            "⚠️ 解析时丢弃: 无选项 {} 条, 答案未匹配 {} 条",
            stats.malformed, stats.missing_answer
        );
    }
}

/// 记录窗口开始信息
pub fn log_window_start(window_num: usize, total_windows: usize, start: usize, end: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 个窗口", window_num, total_windows);
    info!("📄 本窗口题目: {}-{} / 共 {} 条", start, end, total);
    info!("{}", "=".repeat(60));
}

/// 记录窗口完成信息
pub fn log_window_complete(window_num: usize, quiz_count: usize, discarded: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 个窗口完成: 生成测验 {} 份, 截断 {} 条", window_num, quiz_count, discarded);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(corpus: &CorpusStats, run: &RunStats, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 题目记录: {} 条", corpus.records);
    info!("✅ 生成测验: {} 份 / 输出文档 {} 个", run.quizzes, run.documents);
    info!("✂️ 截断丢弃: {} 条", run.discarded_records);
    info!("📈 类目分布:");
    for (category, count) in &run.category_counts {
        info!("  - {}: {} 份", category, count);
    }
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
