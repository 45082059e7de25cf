use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Nothing here is fatal: unknown terminal commands are printed to the
/// scrollback instead, and collaborator failures are logged and dropped.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("invalid profile json: {0}")]
    Profile(#[source] serde_json::Error),

    #[error("invalid config json: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("unknown skill category `{0}`")]
    UnknownCategory(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
