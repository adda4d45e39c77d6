use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("date {year:04}-{month:02}-{day:02} is out of range")]
    DateOutOfRange { year: i32, month: u32, day: u32 },

    #[error("invalid timestamp {0:?}: expected RFC 3339 or YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("resource registry: {0}")]
    Registry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
