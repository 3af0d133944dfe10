// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndianError {
    #[error("width overflow: tried to reverse {requested} bytes, maximum scalar width is {max}")]
    WidthOverflow { requested: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, EndianError>;
