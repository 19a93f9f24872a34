use std::fmt::{Display, Formatter};

pub mod float;
pub mod log;
pub mod prelude;
pub mod rng;
pub mod serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum PrngError {
    InvalidTableLength { expected: usize, got: usize },
    InvalidMagic { got: [u8; 4] },
    InvalidDataLength { expected: usize, got: usize },
    StringError(String),
}

impl Display for PrngError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PrngError::InvalidTableLength { expected, got } => {
                write!(
                    f,
                    "Invalid constant table: expected at least {} bytes, got {}",
                    expected, got
                )
            }
            PrngError::InvalidMagic { got } => {
                write!(f, "Invalid snapshot header: {:02x?}", got)
            }
            PrngError::InvalidDataLength { expected, got } => {
                write!(f, "Invalid data length: expected {}, got {}", expected, got)
            }
            PrngError::StringError(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for PrngError {}

impl From<String> for PrngError {
    fn from(error: String) -> Self {
        PrngError::StringError(error)
    }
}

impl From<&str> for PrngError {
    fn from(error: &str) -> Self {
        PrngError::StringError(error.to_string())
    }
}

pub type PrngResult<T> = Result<T, PrngError>;
