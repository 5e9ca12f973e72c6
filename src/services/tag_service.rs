//! 标签提取
//!
//! 从题干文本中提取名词标签，并并入来源文件标识

use crate::utils::text;

/// 每道题最多取的名词标签数
const MAX_NOUN_TAGS: usize = 3;

/// 提取单道题的标签
///
/// 分词后做词性标注，按原始顺序取前 3 个名词（统一小写），
/// 再并入来源文件标识，保持插入顺序去重。
/// 空文本只返回文件标识。
pub fn extract_tags(question: &str, file_identifier: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(MAX_NOUN_TAGS + 1);

    for token in text::tokenize(question) {
        if tags.len() >= MAX_NOUN_TAGS {
            break;
        }
        if !text::is_noun(&token.text) {
            continue;
        }
        let tag = token.text.to_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let file_tag = file_identifier.to_string();
    if !tags.contains(&file_tag) {
        tags.push(file_tag);
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_tags_takes_first_nouns_in_order() {
        let tags = extract_tags("The gravity of Earth pulls the Moon", "physics");
        assert_eq!(tags, vec!["gravity", "earth", "pulls", "physics"]);
    }

    #[test]
    fn test_empty_text_yields_file_identifier_only() {
        assert_eq!(extract_tags("", "animals"), vec!["animals".to_string()]);
    }

    #[test]
    fn test_tags_are_deduplicated() {
        let tags = extract_tags("Planet planet PLANET planet", "space");
        assert_eq!(tags, vec!["planet".to_string(), "space".to_string()]);
    }

    #[test]
    fn test_file_identifier_not_duplicated() {
        let tags = extract_tags("Physics question about physics", "physics");
        assert_eq!(tags.iter().filter(|t| *t == "physics").count(), 1);
    }
}
