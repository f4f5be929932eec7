use crate::fit::{AccessError, DecodeError, FileType};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error(transparent)]
    Argument(#[from] clap::Error),
    #[error("open {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("unknown filetype '{0}'")]
    UnknownFileType(FileType),
    #[error("failed to extract {file_type} file: {source}")]
    Extraction {
        file_type: FileType,
        source: AccessError,
    },
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

pub type DumpResult<T> = Result<T, DumpError>;

impl DumpError {
    pub fn kind(&self) -> &'static str {
        use DumpError::*;
        match self {
            Argument(_) => "Argument",
            Io { .. } => "Io",
            Decode(_) => "Decode",
            UnknownFileType(_) => "UnknownFileType",
            Extraction { .. } => "Extraction",
            Output(_) => "Output",
        }
    }
}
