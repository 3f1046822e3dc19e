use std::path::PathBuf;

/// Why a single cleaned line could not be encoded.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unresolvable address `{operand}`: not a predefined symbol or a decimal literal")]
    UnresolvableAddress { operand: String },
    #[error("address `{operand}` does not fit in 15 bits (0..=32767)")]
    AddressOutOfRange { operand: String },
    #[error("unknown computation `{mnemonic}`")]
    UnknownComputation { mnemonic: String },
    #[error("unknown destination `{mnemonic}`")]
    UnknownDestination { mnemonic: String },
    #[error("unknown jump `{mnemonic}`")]
    UnknownJump { mnemonic: String },
    #[error("empty line")]
    EmptyLine,
}

#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("invalid file kind {path:?}: expected a `.asm` file")]
    InvalidKind { path: PathBuf },
    #[error("file not found: {path:?}")]
    Missing { path: PathBuf },
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render listing: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("line {line} (`{text}`): {source}")]
    Line {
        line: usize,
        text: String,
        #[source]
        source: EncodeError,
    },
    #[error(transparent)]
    File(#[from] FileError),
}

impl AsmError {
    /// Source line number for per-line failures.
    pub fn line(&self) -> Option<usize> {
        match self {
            AsmError::Line { line, .. } => Some(*line),
            AsmError::File(_) => None,
        }
    }
}
