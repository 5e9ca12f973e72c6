pub mod category_service;
pub mod phrase_service;
pub mod quiz_service;
pub mod record_parser;
pub mod tag_service;

pub use quiz_service::QuizService;
pub use record_parser::{ParseStats, RecordParser};
