use serde::{Deserialize, Serialize};

/// 题目选项
///
/// `id` 为选项在题目中的出现顺序（从 "0" 开始的整数字符串）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

impl AnswerOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// 解析后的题目记录
///
/// 由语料解析器创建，标签提取器补充 `tags`，之后只读。
/// 不变量：`correct_answer` 必须是 `options` 中某个选项的 id，且 `options` 非空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题干
    pub question: String,
    /// 选项列表（按出现顺序）
    pub options: Vec<AnswerOption>,
    /// 正确答案对应的选项 id
    #[serde(rename = "correctAnswer")]
    pub correct_answer: String,
    /// 标签集合（按插入顺序去重）
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuestionRecord {
    /// 获取正确答案的文本
    pub fn correct_option_text(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|opt| opt.id == self.correct_answer)
            .map(|opt| opt.text.as_str())
    }
}
