//! 关键短语提取
//!
//! 对一组题目的合并文本做名词短语、实体、独立名词与标签的
//! 多重集合计数，选出用于命名测验的代表性短语

use std::collections::{HashMap, HashSet};

use crate::utils::text::{self, PosTag, Token};

/// 最多返回的短语数
const MAX_PHRASES: usize = 5;
/// 入选短语的最大词数
const MAX_PHRASE_WORDS: usize = 3;
/// 入选短语的最小出现次数
const MIN_PHRASE_COUNT: usize = 2;

/// 保持首次出现顺序的多重集合计数器
///
/// 排序使用 (次数降序, 首见位置升序)，不依赖任何
/// 运行时的偶然插入顺序行为
#[derive(Default)]
struct PhraseCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl PhraseCounter {
    fn add(&mut self, phrase: String) {
        match self.index.get(&phrase) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(phrase.clone(), self.entries.len());
                self.entries.push((phrase, 1));
            }
        }
    }

    fn top_phrases(self) -> Vec<String> {
        let mut candidates: Vec<(String, usize)> = self
            .entries
            .into_iter()
            .filter(|(phrase, count)| {
                *count >= MIN_PHRASE_COUNT
                    && phrase.split_whitespace().count() <= MAX_PHRASE_WORDS
            })
            .collect();
        // 稳定排序：次数相同时保持首见顺序
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
        candidates
            .into_iter()
            .take(MAX_PHRASES)
            .map(|(phrase, _)| phrase)
            .collect()
    }
}

/// 从合并语料与聚合标签中提取代表性短语
///
/// 四路来源依次并入同一个多重集合：
/// (a) 名词短语块（小写化，剔除停用词与长度 ≤2 的词）
/// (b) 启发式命名实体（连续大写开头的词串，小写化）
/// (c) 未被 (a) 覆盖的独立名词
/// (d) 长度 >2 的标签（小写化）
pub fn extract_key_phrases(corpus: &str, tags: &[String]) -> Vec<String> {
    let tokens = text::tokenize(corpus);

    let (chunks, chunk_words, standalone) = collect_noun_phrases(&tokens);
    let entities = collect_entities(&tokens);

    let mut counter = PhraseCounter::default();
    for phrase in chunks {
        counter.add(phrase);
    }
    for entity in entities {
        counter.add(entity);
    }
    for noun in standalone {
        if !chunk_words.contains(&noun) {
            counter.add(noun);
        }
    }
    for tag in tags {
        if tag.chars().count() > 2 {
            counter.add(tag.to_lowercase());
        }
    }

    counter.top_phrases()
}

/// 名词短语分块
///
/// 连续 ≥2 个名词构成一个短语块；落单的名词进入独立名词流。
/// 返回 (短语块, 短语块覆盖的词集合, 独立名词)
fn collect_noun_phrases(
    tokens: &[Token],
) -> (Vec<String>, HashSet<String>, Vec<String>) {
    let mut chunks = Vec::new();
    let mut chunk_words = HashSet::new();
    let mut standalone = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for token in tokens {
        // 名词串不跨句
        if token.sentence_start {
            flush_noun_run(&mut run, &mut chunks, &mut chunk_words, &mut standalone);
        }
        if text::tag_token(&token.text) == PosTag::Noun {
            run.push(token.text.to_lowercase());
            continue;
        }
        flush_noun_run(&mut run, &mut chunks, &mut chunk_words, &mut standalone);
    }
    flush_noun_run(&mut run, &mut chunks, &mut chunk_words, &mut standalone);

    (chunks, chunk_words, standalone)
}

fn flush_noun_run(
    run: &mut Vec<String>,
    chunks: &mut Vec<String>,
    chunk_words: &mut HashSet<String>,
    standalone: &mut Vec<String>,
) {
    // 分块后的归一化：剔除停用词与长度 ≤2 的词，仅保留非空结果
    let normalized: Vec<String> = run
        .drain(..)
        .filter(|word| !text::is_stop_word(word) && word.chars().count() > 2)
        .collect();

    match normalized.len() {
        0 => {}
        1 => standalone.push(normalized.into_iter().next().unwrap_or_default()),
        _ => {
            for word in &normalized {
                chunk_words.insert(word.clone());
            }
            chunks.push(normalized.join(" "));
        }
    }
}

/// 启发式命名实体提取
///
/// 连续大写开头的词串视为实体；单个词仅在非句首、
/// 非停用词且长度 >2 时入选。实体文本统一小写
fn collect_entities(tokens: &[Token]) -> Vec<String> {
    let mut entities = Vec::new();
    let mut run: Vec<&Token> = Vec::new();

    for token in tokens {
        // 实体串不跨句
        if token.sentence_start {
            flush_entity_run(&mut run, &mut entities);
        }
        if text::is_capitalized(&token.text) {
            run.push(token);
            continue;
        }
        flush_entity_run(&mut run, &mut entities);
    }
    flush_entity_run(&mut run, &mut entities);

    entities
}

fn flush_entity_run(run: &mut Vec<&Token>, entities: &mut Vec<String>) {
    // 去掉句首大写带进来的前导停用词（如 "The"）
    let start = run
        .iter()
        .position(|token| !text::is_stop_word(&token.text));
    if let Some(start) = start {
        let trimmed = &run[start..];
        if trimmed.len() == 1 {
            let token = trimmed[0];
            if !token.sentence_start && token.text.chars().count() > 2 {
                entities.push(token.text.to_lowercase());
            }
        } else {
            let phrase = trimmed
                .iter()
                .map(|token| token.text.to_lowercase())
                .collect::<Vec<_>>()
                .join(" ");
            entities.push(phrase);
        }
    }
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_phrase_is_selected() {
        // "Red Planet" 同时命中名词短语块与实体两路来源
        let corpus = "The Red Planet is distant. Astronomers admire the Red Planet.";
        let phrases = extract_key_phrases(corpus, &[]);
        assert!(phrases.contains(&"red planet".to_string()));
    }

    #[test]
    fn test_single_occurrence_is_filtered_out() {
        let corpus = "The unique meteor question mentions nothing twice here at all.";
        let phrases = extract_key_phrases(corpus, &[]);
        assert!(phrases.is_empty());
    }

    #[test]
    fn test_order_is_count_desc_then_first_seen() {
        // "ocean current" 出现 3 次，"coral reef" 与 "tidal wave" 各 2 次，
        // coral reef 先出现；修饰词各只出现一次，被次数过滤
        let corpus = "The ocean current is vast. The coral reef is warm. \
                      The tidal wave is tall. The ocean current is deep. \
                      The coral reef is calm. The tidal wave is cold. \
                      The ocean current is slow.";
        let phrases = extract_key_phrases(corpus, &[]);
        assert_eq!(
            phrases,
            vec![
                "ocean current".to_string(),
                "coral reef".to_string(),
                "tidal wave".to_string()
            ]
        );
    }

    #[test]
    fn test_at_most_five_phrases() {
        let corpus = "alpha beta. alpha beta. gamma delta. gamma delta. \
                      epsilon zeta. epsilon zeta. eta theta. eta theta. \
                      iota kappa. iota kappa. lambda omega. lambda omega.";
        let phrases = extract_key_phrases(corpus, &[]);
        assert_eq!(phrases.len(), 5);
    }

    #[test]
    fn test_tags_merge_into_the_count() {
        // 语料中 "geography" 作为独立名词出现一次，标签流再计一次
        let corpus = "What is geography about? What else is there?";
        let tags = vec!["geography".to_string()];
        let phrases = extract_key_phrases(corpus, &tags);
        assert_eq!(phrases, vec!["geography".to_string()]);
    }

    #[test]
    fn test_long_phrases_are_excluded() {
        // 重复的四词短语被词数上限剔除，两词短语保留
        let corpus = "ancient roman empire trade. ancient roman empire trade. \
                      The stone axe is old. The stone axe is new.";
        let phrases = extract_key_phrases(corpus, &[]);
        assert_eq!(phrases, vec!["stone axe".to_string()]);
    }
}
