use crate::{AnalysisResult, Result, SnippetChange};
use crossbeam_channel::Sender;

/// Estimates time and space complexity of a source snippet.
///
/// Implementations must be pure: identical input yields an identical result,
/// and no input makes `analyze` fail.
pub trait ComplexityEstimator {
    fn analyze(&self, code: &str) -> AnalysisResult;
    fn name(&self) -> &str;
}

pub trait FileWatcher {
    fn watch(&self, tx: Sender<SnippetChange>) -> Result<()>;
}
