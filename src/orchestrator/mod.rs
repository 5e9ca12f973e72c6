//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量测验生成器
//! - 管理应用生命周期（初始化、运行、统计）
//! - 批量加载语料（Vec<QuestionRecord>）
//! - 窗口与分组切分（窗口 100 条，每组 15 条，尾部不足一组截断）
//! - 写出顺序编号的输出文档与标签目录
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<QuestionRecord>)
//!     ↓
//! services::quiz_service (处理单个分组)
//!     ↓
//! services (能力层：parse / tag / phrase / classify)
//!     ↓
//! utils::text (基础设施：分词与词性启发)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：编排层只做调度、落盘和统计
//! 2. **顺序执行**：单线程一次性批任务，无并发、无重试
//! 3. **向下依赖**：编排层 → quiz_service → 基础能力

pub mod batch_processor;

// 重新导出主要类型
pub use batch_processor::{App, RunStats};
