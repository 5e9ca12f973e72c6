//! 测验合成
//!
//! 从一组已打标签的题目记录中抽样并组装一份完整测验：
//! 分类主类目、生成标题与描述、计算难度分布与元数据。
//!
//! 所有随机性都经由注入的随机源，测试中使用固定种子即可复现。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::models::question::{AnswerOption, QuestionRecord};
use crate::models::quiz::{
    DifficultyDistribution, Quiz, QuizItem, QuizMetadata, QuizSettings,
    MINUTES_PER_QUESTION, QUESTION_TYPE_MULTIPLE_CHOICE,
};
use crate::services::{category_service, phrase_service};
use crate::utils::text;

/// 测验合成服务
///
/// 持有唯一的随机源；同一种子下的生成序列完全可复现
pub struct QuizService {
    questions_per_quiz: usize,
    points_per_question: u32,
    passing_score: u32,
    max_additional_tags: usize,
    rng: StdRng,
}

impl QuizService {
    pub fn new(config: &Config) -> Self {
        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            questions_per_quiz: config.questions_per_quiz,
            points_per_question: config.points_per_question,
            passing_score: config.passing_score,
            max_additional_tags: config.max_additional_tags,
            rng,
        }
    }

    /// 从题目池合成一份测验
    ///
    /// 空池不产出测验；其余情况无失败路径
    pub fn build_quiz(&mut self, pool: &[QuestionRecord]) -> Option<Quiz> {
        if pool.is_empty() {
            return None;
        }

        // 1. 无放回抽样
        let sample_size = self.questions_per_quiz.min(pool.len());
        let sample: Vec<&QuestionRecord> = pool
            .choose_multiple(&mut self.rng, sample_size)
            .collect();

        // 2. 聚合标签并分类主类目
        let aggregated_tags = aggregate_tags(&sample);
        let corpus = sample
            .iter()
            .map(|record| record.question.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let major_category = category_service::classify(&aggregated_tags, &corpus);

        // 3. 最终标签：主类目在前，附加标签去重且排除主类目
        let tags = final_tags(major_category, &aggregated_tags, self.max_additional_tags);

        // 4. 关键短语用于标题
        let phrases = phrase_service::extract_key_phrases(&corpus, &aggregated_tags);

        // 5-7. 标题 / 难度分布 / 描述
        let distribution = DifficultyDistribution::for_question_count(sample.len());
        let title = build_title(major_category, &phrases);
        let description = build_description(
            major_category,
            sample.len(),
            &tags,
            &distribution,
            self.passing_score,
        );

        // 8. 组装题目
        let questions = self.build_items(&sample);
        let total_points = self.points_per_question * questions.len() as u32;

        Some(Quiz {
            id: self.next_quiz_id(),
            title,
            description,
            questions,
            settings: QuizSettings::with_passing_score(self.passing_score),
            metadata: QuizMetadata {
                total_points,
                estimated_duration: MINUTES_PER_QUESTION * sample.len(),
                difficulty_distribution: distribution,
                tags,
            },
        })
    }

    /// 由随机源生成测验 id（UUID 格式）
    ///
    /// 走同一个随机源，固定种子下 id 同样可复现
    fn next_quiz_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        self.rng.fill(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid().to_string()
    }

    fn build_items(&self, sample: &[&QuestionRecord]) -> Vec<QuizItem> {
        sample
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let answer_text =
                    text::clean_text(record.correct_option_text().unwrap_or_default());
                QuizItem {
                    id: format!("q{}", index + 1),
                    item_type: QUESTION_TYPE_MULTIPLE_CHOICE.to_string(),
                    question: text::clean_text(&record.question),
                    options: record
                        .options
                        .iter()
                        .map(|option| {
                            AnswerOption::new(option.id.clone(), text::clean_text(&option.text))
                        })
                        .collect(),
                    correct_answer: record.correct_answer.clone(),
                    points: self.points_per_question,
                    explanation: format!("The correct answer is: {}", answer_text),
                }
            })
            .collect()
    }
}

/// 按抽样顺序聚合标签（插入顺序去重）
fn aggregate_tags(sample: &[&QuestionRecord]) -> Vec<String> {
    let mut aggregated = Vec::new();
    for record in sample {
        for tag in &record.tags {
            if !aggregated.contains(tag) {
                aggregated.push(tag.clone());
            }
        }
    }
    aggregated
}

fn final_tags(major_category: &str, aggregated: &[String], max_additional: usize) -> Vec<String> {
    let mut tags = vec![major_category.to_string()];
    for tag in aggregated {
        if tags.len() > max_additional {
            break;
        }
        if tag.eq_ignore_ascii_case(major_category) || tags.contains(tag) {
            continue;
        }
        tags.push(tag.clone());
    }
    tags
}

/// 生成标题
///
/// 有关键短语时取前两个（每词首字母大写，用 " and " 连接）；
/// 否则使用兜底标题
fn build_title(category: &str, phrases: &[String]) -> String {
    if phrases.is_empty() {
        return format!("{} Quiz Challenge", category);
    }
    let topic = phrases
        .iter()
        .take(2)
        .map(|phrase| text::capitalize_words(phrase))
        .collect::<Vec<_>>()
        .join(" and ");
    format!("{} Quiz: {}", category, topic)
}

fn build_description(
    category: &str,
    question_count: usize,
    tags: &[String],
    distribution: &DifficultyDistribution,
    passing_score: u32,
) -> String {
    let topics = tags
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Test your knowledge of {} with {} questions covering {}. \
         Difficulty mix: {} easy, {} medium, {} hard. \
         Score {}% or higher to pass.",
        category,
        question_count,
        topics,
        distribution.easy,
        distribution.medium,
        distribution.hard,
        passing_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(seed: u64) -> Config {
        Config {
            random_seed: Some(seed),
            ..Config::default()
        }
    }

    fn physics_record(index: usize) -> QuestionRecord {
        QuestionRecord {
            question: format!(
                "Which law of physics explains the motion of planets, case {}?",
                index
            ),
            options: vec![
                AnswerOption::new("0", "Newton's first law"),
                AnswerOption::new("1", "Newton's second law"),
                AnswerOption::new("2", "Kepler's law"),
                AnswerOption::new("3", "Ohm's law"),
            ],
            correct_answer: "2".to_string(),
            tags: vec!["physics".to_string(), "motion".to_string()],
        }
    }

    fn physics_pool(count: usize) -> Vec<QuestionRecord> {
        (0..count).map(physics_record).collect()
    }

    #[test]
    fn test_empty_pool_produces_no_quiz() {
        let mut service = QuizService::new(&seeded_config(1));
        assert!(service.build_quiz(&[]).is_none());
    }

    #[test]
    fn test_physics_pool_classifies_as_science() {
        let mut service = QuizService::new(&seeded_config(42));
        let quiz = service.build_quiz(&physics_pool(15)).unwrap();
        assert!(quiz.title.starts_with("Science Quiz"));
        assert_eq!(quiz.metadata.tags[0], "Science");
    }

    #[test]
    fn test_metadata_invariants() {
        let mut service = QuizService::new(&seeded_config(42));
        let quiz = service.build_quiz(&physics_pool(15)).unwrap();
        let distribution = &quiz.metadata.difficulty_distribution;
        assert_eq!(
            distribution.easy + distribution.medium + distribution.hard,
            quiz.questions.len()
        );
        assert_eq!(
            quiz.metadata.total_points,
            10 * quiz.questions.len() as u32
        );
        assert_eq!(quiz.metadata.estimated_duration, 2 * quiz.questions.len());
    }

    #[test]
    fn test_sample_is_capped_at_questions_per_quiz() {
        let mut service = QuizService::new(&seeded_config(7));
        let quiz = service.build_quiz(&physics_pool(40)).unwrap();
        assert_eq!(quiz.questions.len(), 15);
    }

    #[test]
    fn test_small_pool_uses_every_record() {
        let mut service = QuizService::new(&seeded_config(7));
        let quiz = service.build_quiz(&physics_pool(4)).unwrap();
        assert_eq!(quiz.questions.len(), 4);
    }

    #[test]
    fn test_item_assembly() {
        let mut service = QuizService::new(&seeded_config(3));
        let quiz = service.build_quiz(&physics_pool(4)).unwrap();
        for (index, item) in quiz.questions.iter().enumerate() {
            assert_eq!(item.id, format!("q{}", index + 1));
            assert_eq!(item.item_type, "MULTIPLE_CHOICE");
            assert_eq!(item.points, 10);
            assert_eq!(item.correct_answer, "2");
            assert_eq!(item.explanation, "The correct answer is: Kepler's law");
        }
    }

    #[test]
    fn test_settings_are_fixed() {
        let mut service = QuizService::new(&seeded_config(3));
        let quiz = service.build_quiz(&physics_pool(15)).unwrap();
        let settings = &quiz.settings;
        assert!(settings.randomize_questions);
        assert!(settings.randomize_options);
        assert!(settings.show_explanation);
        assert!(settings.show_correct_answer);
        assert!(settings.allow_navigation);
        assert!(settings.show_progress_bar);
        assert!(settings.show_time_remaining);
        assert_eq!(settings.passing_score, 70);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let pool = physics_pool(40);
        let mut first_service = QuizService::new(&seeded_config(99));
        let mut second_service = QuizService::new(&seeded_config(99));
        let first = first_service.build_quiz(&pool).unwrap();
        let second = second_service.build_quiz(&pool).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_fallback_title_without_phrases() {
        // 每道题文本与标签都互不重复，没有出现次数 >1 的短语
        let pool: Vec<QuestionRecord> = vec![QuestionRecord {
            question: "Completely singular wording".to_string(),
            options: vec![AnswerOption::new("0", "Yes")],
            correct_answer: "0".to_string(),
            tags: vec!["zz".to_string()],
        }];
        let mut service = QuizService::new(&seeded_config(5));
        let quiz = service.build_quiz(&pool).unwrap();
        assert_eq!(quiz.title, "Knowledge Quiz Challenge");
    }

    #[test]
    fn test_major_category_excluded_from_additional_tags() {
        let mut pool = physics_pool(15);
        for record in &mut pool {
            record.tags.push("science".to_string());
        }
        let mut service = QuizService::new(&seeded_config(11));
        let quiz = service.build_quiz(&pool).unwrap();
        let tags = &quiz.metadata.tags;
        assert_eq!(tags[0], "Science");
        assert!(!tags[1..].iter().any(|t| t.eq_ignore_ascii_case("Science")));
        assert!(tags.len() <= 6);
    }
}
