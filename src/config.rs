/// 程序配置
///
/// 所有批次参数都显式可配，避免散落的魔法常量
#[derive(Clone, Debug)]
pub struct Config {
    /// 语料源目录
    pub source_dir: String,
    /// 输出目录
    pub output_dir: String,
    /// 每个批次窗口的题目数
    pub questions_per_batch: usize,
    /// 每份测验的题目数
    pub questions_per_quiz: usize,
    /// 每道题的分值
    pub points_per_question: u32,
    /// 及格分数（0-100）
    pub passing_score: u32,
    /// 主类目之外附加的最大标签数
    pub max_additional_tags: usize,
    /// 随机种子（不设置时结果不可复现）
    pub random_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: "corpus".to_string(),
            output_dir: "output".to_string(),
            questions_per_batch: 100,
            questions_per_quiz: 15,
            points_per_question: 10,
            passing_score: 70,
            max_additional_tags: 5,
            random_seed: None,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            source_dir: std::env::var("SOURCE_DIR").unwrap_or(default.source_dir),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            questions_per_batch: std::env::var("QUESTIONS_PER_BATCH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.questions_per_batch),
            questions_per_quiz: std::env::var("QUESTIONS_PER_QUIZ").ok().and_then(|v| v.parse().ok()).unwrap_or(default.questions_per_quiz),
            points_per_question: std::env::var("POINTS_PER_QUESTION").ok().and_then(|v| v.parse().ok()).unwrap_or(default.points_per_question),
            passing_score: std::env::var("PASSING_SCORE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.passing_score),
            max_additional_tags: std::env::var("MAX_ADDITIONAL_TAGS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_additional_tags),
            random_seed: std::env::var("RANDOM_SEED").ok().and_then(|v| v.parse().ok()),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// 应用命令行位置参数：第一个为源目录，第二个为输出目录
    ///
    /// 除这两个目录外不提供其他命令行开关
    pub fn apply_args<I: IntoIterator<Item = String>>(&mut self, args: I) {
        let mut args = args.into_iter();
        if let Some(source_dir) = args.next() {
            self.source_dir = source_dir;
        }
        if let Some(output_dir) = args.next() {
            self.output_dir = output_dir;
        }
    }
}
