//! 语料解析器
//!
//! 将行标记格式的题库文本解析为 [`QuestionRecord`] 序列。
//!
//! 输入格式（每行一条标记，其余行忽略）：
//!
//! ```text
//! #Q <题干>
//! ^ <正确答案文本>
//! A <选项文本>
//! B <选项文本>
//! C <选项文本>
//! D <选项文本>
//! ```
//!
//! 解析器是显式状态机：`feed` 逐行推进，`finish` 收尾。
//! 对相同的字节输入，输出完全确定。

use regex::Regex;

use crate::models::question::{AnswerOption, QuestionRecord};

/// 每道题最多 4 个选项（A-D）
const MAX_OPTIONS: usize = 4;

/// 解析统计
///
/// 被丢弃的记录只计数，不作为错误上报
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// 没有任何选项的记录数
    pub malformed: usize,
    /// 声明的正确答案未匹配任何选项的记录数
    pub missing_answer: usize,
}

/// 进行中的记录
#[derive(Debug)]
struct PartialRecord {
    question: String,
    options: Vec<AnswerOption>,
    /// `^` 行声明的待匹配正确答案文本
    answer_text: Option<String>,
    /// 已解析出的正确答案选项 id
    correct: Option<String>,
}

impl PartialRecord {
    fn new(question: String) -> Self {
        Self {
            question,
            options: Vec::new(),
            answer_text: None,
            correct: None,
        }
    }
}

/// 行标记语料解析器（状态机）
pub struct RecordParser {
    marker: Regex,
    current: Option<PartialRecord>,
    stats: ParseStats,
}

impl RecordParser {
    pub fn new() -> Self {
        Self {
            // 标记行：#Q / ^ / A-D，后跟一个空白与正文
            marker: Regex::new(r"^(#Q|\^|[ABCD])\s+(.*)$").expect("标记正则应当合法"),
            current: None,
            stats: ParseStats::default(),
        }
    }

    /// 送入一行，返回本行触发完成的记录（如有）
    ///
    /// 空行与未识别的标记一律忽略
    pub fn feed(&mut self, line: &str) -> Option<QuestionRecord> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let captures = self.marker.captures(line)?;
        let text = captures.get(2).map(|m| m.as_str().trim())?.to_string();

        match captures.get(1).map(|m| m.as_str()) {
            Some("#Q") => {
                let completed = self.flush_interior();
                self.current = Some(PartialRecord::new(text));
                completed
            }
            Some("^") => {
                if let Some(record) = self.current.as_mut() {
                    record.answer_text = Some(text);
                }
                None
            }
            Some(_) => {
                if let Some(record) = self.current.as_mut() {
                    if record.options.len() < MAX_OPTIONS {
                        let id = record.options.len().to_string();
                        if record.answer_text.as_deref() == Some(text.as_str()) {
                            record.correct = Some(id.clone());
                        }
                        record.options.push(AnswerOption::new(id, text));
                    }
                }
                None
            }
            None => None,
        }
    }

    /// 输入结束时收尾，返回末尾记录（如有）
    ///
    /// 与中间记录不同：末尾记录有选项但未匹配到正确答案时，
    /// 回退为选项 "0"（保留自原实现的行为差异，不做推广）
    pub fn finish(&mut self) -> Option<QuestionRecord> {
        let record = self.current.take()?;
        if record.options.is_empty() {
            self.stats.malformed += 1;
            return None;
        }
        let correct_answer = record.correct.unwrap_or_else(|| "0".to_string());
        Some(QuestionRecord {
            question: record.question,
            options: record.options,
            correct_answer,
            tags: Vec::new(),
        })
    }

    /// 解析统计
    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// 中间记录的冲刷规则：必须有选项且正确答案已解析，否则静默丢弃并计数
    fn flush_interior(&mut self) -> Option<QuestionRecord> {
        let record = self.current.take()?;
        if record.options.is_empty() {
            self.stats.malformed += 1;
            return None;
        }
        match record.correct {
            Some(correct_answer) => Some(QuestionRecord {
                question: record.question,
                options: record.options,
                correct_answer,
                tags: Vec::new(),
            }),
            None => {
                self.stats.missing_answer += 1;
                None
            }
        }
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

/// 解析一段完整文本，返回全部记录与统计
pub fn parse_corpus(content: &str) -> (Vec<QuestionRecord>, ParseStats) {
    let mut parser = RecordParser::new();
    let mut records = Vec::new();
    for line in content.lines() {
        if let Some(record) = parser.feed(line) {
            records.push(record);
        }
    }
    if let Some(record) = parser.finish() {
        records.push(record);
    }
    (records, parser.stats())
}
