//! 批量测验生成器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责语料批处理和输出文档的落盘。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、初始化日志文件
//! 2. **批量加载**：按文件名字典序读入全部语料（`Vec<QuestionRecord>`）
//! 3. **窗口切分**：把主序列按固定大小切成窗口，窗口内再按组切分
//! 4. **向下委托**：每组交给 QuizService 合成一份测验
//! 5. **文档落盘**：每个窗口的测验汇成一个顺序编号的 JSON 文档
//! 6. **全局统计**：汇总记录数、测验数与类目分布
//!
//! ## 设计特点
//!
//! - **单线程顺序执行**：先完整物化语料，再开始批处理
//! - **一次性任务**：遇到首个未处理的 I/O 错误即中止，已写出的文档不回滚
//! - **随机源唯一**：所有随机性经由 QuizService 持有的注入随机源

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};
use crate::models::category;
use crate::models::loaders::corpus_loader;
use crate::models::question::QuestionRecord;
use crate::models::quiz::QuizDocument;
use crate::services::quiz_service::QuizService;
use crate::utils::logging;

/// 运行统计
#[derive(Debug, Default)]
pub struct RunStats {
    /// 生成的测验总数
    pub quizzes: usize,
    /// 写出的输出文档数
    pub documents: usize,
    /// 因不足一组被截断丢弃的记录数
    pub discarded_records: usize,
    /// 各主类目的测验数量
    pub category_counts: BTreeMap<String, usize>,
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        validate_config(&config)?;

        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;

        logging::log_startup(&config.source_dir, &config.output_dir);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> Result<RunStats> {
        // 加载全部语料
        info!("\n📁 正在扫描语料目录...");
        let (records, corpus_stats) =
            corpus_loader::load_all_corpus_files(&self.config.source_dir)?;

        if records.is_empty() {
            warn!("⚠️ 语料目录中没有可用的题目记录，程序结束");
            return Ok(RunStats::default());
        }

        logging::log_corpus_loaded(
            &corpus_stats,
            self.config.questions_per_batch,
            self.config.questions_per_quiz,
        );

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| AppError::file_write_failed(self.config.output_dir.as_str(), e))?;

        // 写出标签目录
        self.write_tag_catalog()?;

        // 处理所有窗口
        let stats = self.generate_quizzes(&records)?;

        // 输出最终统计
        logging::print_final_stats(&corpus_stats, &stats, &self.config.output_log_file);

        Ok(stats)
    }

    /// 把主序列切成窗口并逐组合成测验
    fn generate_quizzes(&self, records: &[QuestionRecord]) -> Result<RunStats> {
        let mut quiz_service = QuizService::new(&self.config);
        let mut stats = RunStats::default();

        let total = records.len();
        let window_size = self.config.questions_per_batch;
        let group_size = self.config.questions_per_quiz;
        let total_windows = (total + window_size - 1) / window_size;

        for (window_index, window) in records.chunks(window_size).enumerate() {
            let window_num = window_index + 1;
            let start = window_index * window_size + 1;
            let end = start + window.len() - 1;
            logging::log_window_start(window_num, total_windows, start, end, total);

            let mut quizzes = Vec::new();
            for group in window.chunks_exact(group_size) {
                if let Some(quiz) = quiz_service.build_quiz(group) {
                    if self.config.verbose_logging {
                        info!("  🧩 {}", logging::truncate_text(&quiz.title, 60));
                    }
                    if let Some(major_category) = quiz.metadata.tags.first() {
                        *stats
                            .category_counts
                            .entry(major_category.clone())
                            .or_insert(0) += 1;
                    }
                    quizzes.push(quiz);
                }
            }

            // 不足一组的尾部记录被截断（不是错误）
            let discarded = window.chunks_exact(group_size).remainder().len();
            stats.discarded_records += discarded;

            if quizzes.is_empty() {
                warn!("⚠️ 第 {} 个窗口不足一组，未生成测验", window_num);
                continue;
            }

            let quiz_count = quizzes.len();
            stats.quizzes += quiz_count;
            stats.documents += 1;
            self.write_document(stats.documents, QuizDocument { quizzes })?;

            logging::log_window_complete(window_num, quiz_count, discarded);
        }

        Ok(stats)
    }

    /// 写出单个窗口的测验文档（顺序编号）
    fn write_document(&self, document_num: usize, document: QuizDocument) -> AppResult<()> {
        let file_name = format!("quiz_batch_{:03}.json", document_num);
        let path = Path::new(&self.config.output_dir).join(&file_name);

        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&path, json)
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        info!("💾 已写出: {}", file_name);
        Ok(())
    }

    /// 写出标签目录 tags.json
    fn write_tag_catalog(&self) -> AppResult<()> {
        let catalog = category::build_tag_catalog();
        let path = Path::new(&self.config.output_dir).join("tags.json");

        let json = serde_json::to_string_pretty(&catalog)?;
        fs::write(&path, json)
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        info!("🏷️ 标签目录已写出: tags.json");
        Ok(())
    }
}

/// 校验批次配置
fn validate_config(config: &Config) -> AppResult<()> {
    if config.passing_score > 100 {
        return Err(AppError::Config(ConfigError::InvalidPassingScore {
            value: config.passing_score,
        }));
    }
    if config.questions_per_batch == 0 {
        return Err(AppError::Config(ConfigError::ZeroBatchParameter {
            name: "questions_per_batch",
        }));
    }
    if config.questions_per_quiz == 0 {
        return Err(AppError::Config(ConfigError::ZeroBatchParameter {
            name: "questions_per_quiz",
        }));
    }
    Ok(())
}
