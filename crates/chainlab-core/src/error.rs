use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid base58 character '{0}'")]
    InvalidCharacter(char),

    #[error("payload too short: {got} bytes, need at least {min}")]
    PayloadTooShort { got: usize, min: usize },

    #[error("invalid checksum")]
    InvalidChecksum,
}
