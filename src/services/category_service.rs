//! 类目分类
//!
//! 用固定类目表对标签与题干文本做关键词打分

use crate::models::category::{CATEGORIES, DEFAULT_CATEGORY};

/// 按关键词命中数选出最佳类目
///
/// 对每个类目统计其关键词在「小写标签 + 小写文本」拼接串中
/// 以子串形式出现的个数。得分最高者胜出；得分相同时取
/// 类目表中靠前者；全部为 0 时返回兜底类目。
/// 纯函数：相同输入必然得到相同结果。
pub fn classify(tags: &[String], text: &str) -> &'static str {
    let mut haystack = tags.join(" ").to_lowercase();
    haystack.push(' ');
    haystack.push_str(&text.to_lowercase());

    let mut best_name = DEFAULT_CATEGORY;
    let mut best_score = 0usize;

    for category in &CATEGORIES {
        let score = category
            .keywords
            .iter()
            .filter(|keyword| haystack.contains(*keyword))
            .count();
        if score > best_score {
            best_score = score;
            best_name = category.name;
        }
    }

    best_name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_physics_tag_classifies_as_science() {
        assert_eq!(classify(&tags(&["physics"]), ""), "Science");
    }

    #[test]
    fn test_no_match_returns_default_category() {
        assert_eq!(classify(&tags(&["zebra"]), "nothing relevant"), "Knowledge");
    }

    #[test]
    fn test_tie_breaks_by_table_order() {
        // "physics" 命中 Science，"computer" 命中 Technology，各得 1 分；
        // Science 在表中靠前，胜出
        assert_eq!(
            classify(&tags(&["physics", "computer"]), ""),
            "Science"
        );
    }

    #[test]
    fn test_higher_score_wins_over_table_order() {
        assert_eq!(
            classify(&tags(&["computer", "engineering"]), "machine design"),
            "Technology"
        );
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "astronomy" 作为子串出现在更长的词里同样计分
        assert_eq!(classify(&tags(&[]), "radioastronomy survey"), "Science");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let input_tags = tags(&["history", "politics"]);
        let text = "The politics of ancient history";
        let first = classify(&input_tags, text);
        let second = classify(&input_tags, text);
        assert_eq!(first, second);
    }
}
