use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not start the database runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("{0}")]
    Connect(#[source] sqlx::Error),
    #[error("timed out connecting to the database")]
    Timeout,
    #[error("{0}")]
    Query(#[source] sqlx::Error),
    /// The storage engine refused an insert because the username exists.
    #[error("username already exists")]
    Duplicate,
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("username and password are required")]
    EmptyFields,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum SignUpError {
    #[error("all fields are required")]
    EmptyFields,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("username is already taken")]
    UsernameTaken,
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for SignUpError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => SignUpError::UsernameTaken,
            other => SignUpError::Store(other),
        }
    }
}
