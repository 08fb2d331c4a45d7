use thiserror::Error;

/// RSM統一エラー型
#[derive(Debug, Error)]
pub enum RsmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RsmError>;
