use serde::{Deserialize, Serialize};

use crate::models::question::AnswerOption;

/// 题目类型固定为选择题
pub const QUESTION_TYPE_MULTIPLE_CHOICE: &str = "MULTIPLE_CHOICE";

/// 每道题的预计用时（分钟）
pub const MINUTES_PER_QUESTION: usize = 2;

/// 测验中的单道题目
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    /// 题目 id（"q1".."qN"）
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub question: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: String,
    pub points: u32,
    pub explanation: String,
}

/// 测验展示设置
///
/// 除 `passing_score` 外全部为固定值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    pub randomize_questions: bool,
    pub randomize_options: bool,
    pub show_explanation: bool,
    pub show_correct_answer: bool,
    pub passing_score: u32,
    pub allow_navigation: bool,
    pub show_progress_bar: bool,
    pub show_time_remaining: bool,
}

impl QuizSettings {
    pub fn with_passing_score(passing_score: u32) -> Self {
        Self {
            randomize_questions: true,
            randomize_options: true,
            show_explanation: true,
            show_correct_answer: true,
            passing_score,
            allow_navigation: true,
            show_progress_bar: true,
            show_time_remaining: true,
        }
    }
}

/// 难度分布
///
/// 不变量：`easy + medium + hard == 题目数`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyDistribution {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl DifficultyDistribution {
    /// 按题目数计算难度分布
    pub fn for_question_count(count: usize) -> Self {
        let third = count / 3;
        Self {
            easy: third,
            medium: third,
            hard: count - 2 * third,
        }
    }
}

/// 测验元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    pub total_points: u32,
    /// 预计用时（分钟）
    pub estimated_duration: usize,
    pub difficulty_distribution: DifficultyDistribution,
    pub tags: Vec<String>,
}

/// 一份完整的测验
///
/// 每个分组生成一份，生成后不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuizItem>,
    pub settings: QuizSettings,
    pub metadata: QuizMetadata,
}

/// 输出文档（每个批次窗口一份）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDocument {
    pub quizzes: Vec<Quiz>,
}
