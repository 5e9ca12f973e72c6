pub mod corpus_loader;

pub use corpus_loader::{load_all_corpus_files, load_corpus_file, CorpusStats};
