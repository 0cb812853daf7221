use std::fmt::{self, Display};

/// An error whose message is meant to be shown to the user as-is.
#[derive(Debug)]
pub struct CustomError(pub String);

impl Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for CustomError {}
