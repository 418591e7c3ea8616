use crate::tokenizer::TermId;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tokenization method '{0}'")]
    UnknownMethod(String),

    #[error("Class '{class}' has zero total token count, cannot smooth")]
    DegenerateModel { class: String },

    #[error("Class '{0}' does not appear in the corpus")]
    UnknownClass(String),

    #[error("Term id {0} is not in the vocabulary")]
    UnknownTerm(TermId),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
