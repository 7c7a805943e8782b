pub mod analysis;
pub mod ast;
pub mod combine;
pub mod language;
pub mod pipeline;
pub mod preprocess;
pub mod samples;
pub mod tokenizer;


pub use ast::{AstNode, NodeKind};
pub use language::{detect_language, LanguageDetection};
pub use pipeline::{analyze, HeuristicAnalyzer};
pub use preprocess::{preprocess, CleanSource};
pub use samples::{sample, samples, Sample};
pub use tokenizer::tokenize;
