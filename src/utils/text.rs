//! 文本分析基础工具
//!
//! 提供分词、停用词表、启发式词性标注等能力，
//! 供标签提取和关键短语提取使用

use phf::phf_set;

/// 英文停用词表
static STOP_WORDS: phf::Set<&'static str> = phf_set! {
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "did", "do",
    "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
};

/// 词性标注结果（启发式近似）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    /// 名词（含被当作名词短语成分的修饰词）
    Noun,
    /// 动词
    Verb,
    /// 副词
    Adverb,
    /// 停用词
    Stop,
    /// 其他（数字、过短词等）
    Other,
}

/// 带位置信息的词元
#[derive(Debug, Clone)]
pub struct Token {
    /// 原始大小写的词面
    pub text: String,
    /// 是否位于句首
    pub sentence_start: bool,
}

/// 将文本切分为词元序列
///
/// 词面保留原始大小写；`.` `?` `!` `;` 之后的词视为句首
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut sentence_start = true;

    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            current.push(ch);
            continue;
        }
        if !current.is_empty() {
            push_token(&mut tokens, &mut current, &mut sentence_start);
        }
        if matches!(ch, '.' | '?' | '!' | ';') {
            sentence_start = true;
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, &mut current, &mut sentence_start);
    }

    tokens
}

fn push_token(tokens: &mut Vec<Token>, current: &mut String, sentence_start: &mut bool) {
    let text = current.trim_matches('\'').to_string();
    current.clear();
    if text.is_empty() {
        return;
    }
    tokens.push(Token {
        text,
        sentence_start: *sentence_start,
    });
    *sentence_start = false;
}

/// 启发式词性标注
///
/// 规则近似原实现的统计标注器：停用词与过短词出局，
/// "-ly" 视为副词，"-ing" / "-ed" 视为动词，其余按名词处理
pub fn tag_token(token: &str) -> PosTag {
    let lower = token.to_lowercase();
    if STOP_WORDS.contains(lower.as_str()) {
        return PosTag::Stop;
    }
    if lower.chars().count() <= 2 {
        return PosTag::Other;
    }
    if !lower.chars().all(|c| c.is_alphabetic() || c == '\'') {
        return PosTag::Other;
    }
    if lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if lower.chars().count() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
        return PosTag::Verb;
    }
    PosTag::Noun
}

/// 判断词元是否为名词
pub fn is_noun(token: &str) -> bool {
    tag_token(token) == PosTag::Noun
}

/// 判断是否为停用词
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token.to_lowercase().as_str())
}

/// 判断词面是否以大写字母开头
pub fn is_capitalized(token: &str) -> bool {
    token
        .chars()
        .next()
        .map(|c| c.is_uppercase())
        .unwrap_or(false)
}

/// 清理文本：去除首尾空白并统一弯引号
pub fn clean_text(text: &str) -> String {
    text.trim().replace('“', "\"").replace('”', "\"")
}

/// 将短语中每个单词首字母大写
pub fn capitalize_words(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_marks_sentence_starts() {
        let tokens = tokenize("What is gravity? Gravity is a force.");
        assert_eq!(tokens[0].text, "What");
        assert!(tokens[0].sentence_start);
        assert!(!tokens[1].sentence_start);
        let gravity = tokens.iter().find(|t| t.text == "Gravity").unwrap();
        assert!(gravity.sentence_start);
    }

    #[test]
    fn test_tag_token_rules() {
        assert_eq!(tag_token("the"), PosTag::Stop);
        assert_eq!(tag_token("is"), PosTag::Stop);
        assert_eq!(tag_token("at"), PosTag::Stop);
        assert_eq!(tag_token("ox"), PosTag::Other);
        assert_eq!(tag_token("1969"), PosTag::Other);
        assert_eq!(tag_token("quickly"), PosTag::Adverb);
        assert_eq!(tag_token("running"), PosTag::Verb);
        assert_eq!(tag_token("planet"), PosTag::Noun);
        assert_eq!(tag_token("Planet"), PosTag::Noun);
    }

    #[test]
    fn test_clean_text_normalizes_quotes() {
        assert_eq!(clean_text("  “Red” planet  "), "\"Red\" planet");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("red planet"), "Red Planet");
        assert_eq!(capitalize_words("solar system dynamics"), "Solar System Dynamics");
    }
}
