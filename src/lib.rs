//! # Quiz Batch Generate
//!
//! 把行标记格式的题库语料批量转换为测验 JSON 文档的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `utils/text` - 分词、停用词表与启发式词性标注
//! - `utils/logging` - 日志格式化与统计输出
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力只处理单个输入
//! - `RecordParser` - 行标记语料的状态机解析能力
//! - `tag_service` - 单道题的标签提取能力
//! - `phrase_service` - 一组题目的关键短语提取能力
//! - `category_service` - 关键词打分分类能力
//!
//! ### ③ 合成层（Synthesis）
//! - `services/quiz_service` - 定义"一组题目"到"一份测验"的完整流程
//! - 抽样 → 分类 → 标题/描述 → 组装（随机源注入，可复现）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量语料处理器，窗口切分与落盘
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::question::{AnswerOption, QuestionRecord};
pub use models::quiz::{Quiz, QuizDocument};
pub use orchestrator::{App, RunStats};
pub use services::{QuizService, RecordParser};
