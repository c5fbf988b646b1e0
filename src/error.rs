use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Input that breaks the line contract with the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("feedback must be exactly {expected} characters, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("{0:?} is not a five-letter lowercase word")]
    InvalidWord(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("no candidate words remain; the feedback entered so far is contradictory")]
    InvalidState,
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("the dictionary contains no words")]
    EmptyDictionary,
    #[error("could not read dictionary {path:?}: {source}")]
    Dictionary {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("dictionary {path:?} is not a JSON array of words: {source}")]
    DictionaryFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
