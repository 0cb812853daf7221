use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// A record arrived without a field every catalog entry needs.
    MalformedInput {
        record: &'static str,
        id: String,
        field: &'static str,
    },
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedInput { record, id, field } => {
                write!(f, "Malformed {record} `{id}`: missing {field}")
            }
        }
    }
}
