use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Cannot read wordlist file: {0}")]
    Read(String, #[source] io::Error),
}

pub(crate) trait IntoWordlistError<T> {
    fn with_wordlist_error<S: Into<String>>(self: Self, details: S) -> Result<T, WordlistError>;
}

impl<T> IntoWordlistError<T> for Result<T, io::Error> {
    fn with_wordlist_error<S: Into<String>>(self: Self, path: S) -> Result<T, WordlistError> {
        self.map_err(|err| WordlistError::Read(path.into(), err))
    }
}
