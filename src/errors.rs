use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // clear and print refuse to run on an empty list
    #[error("skip list is empty")]
    EmptyList,

    #[error("key not found")]
    KeyNotFound,
}
