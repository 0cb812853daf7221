use crate::catalog;
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    Api { status: u16, message: String },
    Reqwest(reqwest::Error),
    Json(serde_json::Error),
    Catalog(catalog::Error),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Reqwest(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<catalog::Error> for Error {
    fn from(error: catalog::Error) -> Self {
        Self::Catalog(error)
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Api { status, message } => write!(f, "valorant-api returned {status}: {message}"),
            Self::Catalog(error) => error.fmt(f),
            _ => write!(f, "An unexpected error has occurred: `{:?}`", self),
        }
    }
}
