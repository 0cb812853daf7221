use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Rates(String),
    Color(String),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Toml(error)
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "Failed to read configuration: {error}"),
            Self::Toml(error) => write!(f, "Invalid configuration: {error}"),
            Self::Rates(message) => write!(f, "Invalid drop rates: {message}"),
            Self::Color(name) => write!(f, "Unknown color `{name}`"),
        }
    }
}
