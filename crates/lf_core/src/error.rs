use std::fmt;

#[derive(Debug)]
pub enum GameError {
    InvalidConfig(String),
    OutOfPool { number: u8, pool_size: u8 },
    IncompleteSelection { expected: u8, found: u8 },
    SelectionFull { limit: u8 },
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidConfig(msg) => {
                write!(f, "Invalid game config: {}", msg)
            }
            GameError::OutOfPool { number, pool_size } => {
                write!(f, "Number {} is outside the pool 1-{}", number, pool_size)
            }
            GameError::IncompleteSelection { expected, found } => {
                write!(f, "Selection incomplete: expected {} numbers, found {}", expected, found)
            }
            GameError::SelectionFull { limit } => {
                write!(f, "Selection full: at most {} numbers can be picked", limit)
            }
            GameError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            GameError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            GameError::DeserializationError(err.to_string())
        } else {
            GameError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
