use serde::Deserialize;

/// Envelope every valorant-api endpoint wraps its payload in.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Success { status: u16, data: T },
    Error { status: u16, error: String },
}
