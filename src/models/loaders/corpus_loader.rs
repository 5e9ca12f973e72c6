//! 语料文件加载
//!
//! 读取行标记格式的语料文件，解析为题目记录并打上来源标签

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::models::question::QuestionRecord;
use crate::services::record_parser::{self, ParseStats};
use crate::services::tag_service;

/// 语料加载统计
#[derive(Debug, Default)]
pub struct CorpusStats {
    /// 处理的文件数
    pub files: usize,
    /// 成功解析的记录总数
    pub records: usize,
    /// 无选项被丢弃的记录数
    pub malformed: usize,
    /// 正确答案未解析被丢弃的记录数
    pub missing_answer: usize,
    /// (文件标识, 记录数)，按处理顺序
    pub per_file: Vec<(String, usize)>,
}

/// 加载单个语料文件
///
/// 文件无法读取时返回致命错误；无法解码的字节按替换字符容忍。
/// 每条记录的标签在此处补充（名词标签 + 来源文件标识）
pub fn load_corpus_file(path: &Path) -> AppResult<(Vec<QuestionRecord>, ParseStats)> {
    let bytes = fs::read(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
    let content = String::from_utf8_lossy(&bytes);

    let file_identifier = path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let (mut records, stats) = record_parser::parse_corpus(&content);

    for record in &mut records {
        record.tags = tag_service::extract_tags(&record.question, &file_identifier);
    }

    Ok((records, stats))
}

/// 从目录加载全部语料文件，拼成一个有序主序列
///
/// 迭代顺序固定为文件名字典序（按 UTF-8 字节比较），
/// 保证同一语料多次运行的输出可复现
pub fn load_all_corpus_files(folder_path: &str) -> AppResult<(Vec<QuestionRecord>, CorpusStats)> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(AppError::directory_not_found(folder_path));
    }

    let entries = fs::read_dir(&folder)
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppError::file_read_failed(folder_path, e))?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut all_records = Vec::new();
    let mut stats = CorpusStats::default();

    for path in &paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        let (records, parse_stats) = load_corpus_file(path)?;
        tracing::info!("成功加载 {} 个题目", records.len());

        let file_identifier = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        stats.files += 1;
        stats.records += records.len();
        stats.malformed += parse_stats.malformed;
        stats.missing_answer += parse_stats.missing_answer;
        stats.per_file.push((file_identifier, records.len()));

        all_records.extend(records);
    }

    Ok((all_records, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_corpus_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("quiz_corpus_loader_{}", name));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_question_file(dir: &Path, name: &str, question: &str) {
        let content = format!("#Q {}\n^ Yes\nA Yes\nB No\n", question);
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let result = load_all_corpus_files("/nonexistent/quiz/corpus/dir");
        assert!(result.is_err());
    }

    #[test]
    fn test_files_are_processed_in_lexicographic_order() {
        let dir = temp_corpus_dir("order");
        write_question_file(&dir, "b_second", "Question from second file?");
        write_question_file(&dir, "a_first", "Question from first file?");
        write_question_file(&dir, "c_third", "Question from third file?");

        let (records, stats) = load_all_corpus_files(dir.to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(stats.files, 3);
        let order: Vec<&str> = stats
            .per_file
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(order, vec!["a_first", "b_second", "c_third"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_records_are_tagged_with_file_identifier() {
        let dir = temp_corpus_dir("tags");
        write_question_file(&dir, "animals", "Which mammal sleeps upside down?");

        let (records, _) = load_all_corpus_files(dir.to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].tags.contains(&"animals".to_string()));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let dir = temp_corpus_dir("utf8");
        let mut content = b"#Q Broken \xFF byte question?\n^ Yes\nA Yes\nB No\n".to_vec();
        content.extend_from_slice(b"#Q Clean question?\n^ No\nA Yes\nB No\n");
        fs::write(dir.join("mixed"), content).unwrap();

        let (records, _) = load_all_corpus_files(dir.to_str().unwrap()).unwrap();
        assert_eq!(records.len(), 2);

        let _ = fs::remove_dir_all(&dir);
    }
}
