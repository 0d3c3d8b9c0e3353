use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("line {line}: expected `source target`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
