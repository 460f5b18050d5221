use std::fmt;
use thiserror::Error;

use crate::normalize::Line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Dest,
    Comp,
    Jump,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Dest => write!(f, "dest"),
            Field::Comp => write!(f, "comp"),
            Field::Jump => write!(f, "jump"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse `{0}` as an instruction")]
    Classification(String),

    #[error("Unknown {0} mnemonic: `{1}`")]
    UnknownMnemonic(Field, String),

    #[error("Address out of range: `{0}` (must be 0..=32767)")]
    AddressRange(String),

    #[error("{0}")]
    Line(Box<LineError>),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol map")]
    SymbolDump(#[source] serde_yaml::Error),
}

/// An error raised while translating a particular source line.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct LineError {
    pub line: Line,
    pub error: Error,
}

impl LineError {
    pub fn new(line: &Line, error: Error) -> Self {
        LineError {
            line: line.clone(),
            error,
        }
    }
}

impl From<LineError> for Error {
    fn from(err: LineError) -> Self {
        Error::Line(Box::new(err))
    }
}
