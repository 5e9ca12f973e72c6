pub mod category;
pub mod loaders;
pub mod question;
pub mod quiz;

pub use category::{build_tag_catalog, Category, TagDefinition, CATEGORIES, DEFAULT_CATEGORY};
pub use loaders::{load_all_corpus_files, load_corpus_file, CorpusStats};
pub use question::{AnswerOption, QuestionRecord};
pub use quiz::{
    DifficultyDistribution, Quiz, QuizDocument, QuizItem, QuizMetadata, QuizSettings,
};
